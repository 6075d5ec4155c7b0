use application::transfer::{RentDetailDto, RentDto};
use kernel::KernelError;
use serde::Serialize;
use uuid::Uuid;

use crate::controller::Exhaust;
use crate::error::ErrorStatus;

#[derive(Debug, Serialize)]
pub struct RentResponse {
    id: Uuid,
    user_id: Uuid,
    book_id: Uuid,
    due_date: String,
    returned: bool,
}

impl From<RentDto> for RentResponse {
    fn from(value: RentDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            book_id: value.book_id,
            due_date: value.due_date,
            returned: value.returned,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RentDetailResponse {
    id: Uuid,
    book_id: Uuid,
    book_title: String,
    user_id: Uuid,
    user_name: String,
    due_date: String,
    returned: bool,
    status: String,
}

impl From<RentDetailDto> for RentDetailResponse {
    fn from(value: RentDetailDto) -> Self {
        Self {
            id: value.id,
            book_id: value.book_id,
            book_title: value.book_title,
            user_id: value.user_id,
            user_name: value.user_name,
            due_date: value.due_date,
            returned: value.returned,
            status: value.status,
        }
    }
}

/// Joined rows plus one message per row whose book or member is missing.
#[derive(Debug, Serialize)]
pub struct RentListResponse {
    rows: Vec<RentDetailResponse>,
    warnings: Vec<String>,
}

pub struct RentPresenter;

impl Exhaust<RentDto> for RentPresenter {
    type To = RentResponse;
    fn emit(&self, input: RentDto) -> Self::To {
        RentResponse::from(input)
    }
}

impl Exhaust<Option<RentDto>> for RentPresenter {
    type To = Option<RentResponse>;
    fn emit(&self, input: Option<RentDto>) -> Self::To {
        input.map(RentResponse::from)
    }
}

impl Exhaust<Vec<error_stack::Result<RentDetailDto, KernelError>>> for RentPresenter {
    type To = RentListResponse;
    fn emit(&self, input: Vec<error_stack::Result<RentDetailDto, KernelError>>) -> Self::To {
        let mut rows = Vec::with_capacity(input.len());
        let mut warnings = Vec::new();
        for row in input {
            match row {
                Ok(detail) => rows.push(RentDetailResponse::from(detail)),
                Err(report) => warnings.push(ErrorStatus::from(report).into_response().message),
            }
        }
        RentListResponse { rows, warnings }
    }
}
