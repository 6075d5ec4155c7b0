use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct UserPhone(String);

impl UserPhone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}
