use kernel::prelude::entity::{DestructUser, User};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kind: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            name,
            email,
            phone,
            kind,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kind: String,
}

pub struct GetUserDto {
    pub id: Uuid,
}
