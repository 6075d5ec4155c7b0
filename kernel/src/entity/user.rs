mod email;
mod id;
mod kind;
mod name;
mod phone;

pub use self::{email::*, id::*, kind::*, name::*, phone::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct User {
    id: UserId,
    name: UserName,
    email: UserEmail,
    phone: UserPhone,
    kind: UserKind,
}

impl User {
    pub fn new(
        id: UserId,
        name: UserName,
        email: UserEmail,
        phone: UserPhone,
        kind: UserKind,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            kind,
        }
    }
}
