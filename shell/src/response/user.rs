use application::transfer::UserDto;
use serde::Serialize;
use uuid::Uuid;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
    #[serde(rename = "type")]
    kind: String,
}

impl From<UserDto> for UserResponse {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            kind: value.kind,
        }
    }
}

pub struct UserPresenter;

impl Exhaust<UserDto> for UserPresenter {
    type To = UserResponse;
    fn emit(&self, input: UserDto) -> Self::To {
        UserResponse::from(input)
    }
}

impl Exhaust<Option<UserDto>> for UserPresenter {
    type To = Option<UserResponse>;
    fn emit(&self, input: Option<UserDto>) -> Self::To {
        input.map(UserResponse::from)
    }
}

impl Exhaust<Vec<UserDto>> for UserPresenter {
    type To = Vec<UserResponse>;
    fn emit(&self, input: Vec<UserDto>) -> Self::To {
        input.into_iter().map(UserResponse::from).collect()
    }
}
