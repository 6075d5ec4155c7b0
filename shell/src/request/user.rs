use application::transfer::{CreateUserDto, GetUserDto};
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default, rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
pub struct GetUserRequest {
    id: Uuid,
}

pub struct UserTransformer;

impl Intake<CreateUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, input: CreateUserRequest) -> Self::To {
        CreateUserDto {
            name: input.name,
            email: input.email,
            phone: input.phone,
            kind: input.kind,
        }
    }
}

impl Intake<GetUserRequest> for UserTransformer {
    type To = GetUserDto;
    fn emit(&self, input: GetUserRequest) -> Self::To {
        GetUserDto { id: input.id }
    }
}
