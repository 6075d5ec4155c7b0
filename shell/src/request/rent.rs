use application::transfer::{CreateRentDto, GetRentDto, ReturnRentDto};
use error_stack::{Report, ResultExt};
use kernel::prelude::entity::ISO_DATE;
use kernel::KernelError;
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};

#[derive(Debug, Deserialize)]
pub struct IssueRequest {
    #[serde(default)]
    user_id: Option<Uuid>,
    #[serde(default)]
    book_id: Option<Uuid>,
    #[serde(default)]
    due_date: String,
}

#[derive(Debug, Deserialize)]
pub struct ReturnRequest {
    id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct GetRentRequest {
    id: Uuid,
}

#[derive(Debug, Default, Deserialize)]
pub struct OverdueRequest {
    #[serde(default)]
    today: Option<String>,
}

pub struct RentTransformer;

impl Intake<IssueRequest> for RentTransformer {
    type To = CreateRentDto;
    fn emit(&self, input: IssueRequest) -> Self::To {
        CreateRentDto {
            user_id: input.user_id,
            book_id: input.book_id,
            due_date: input.due_date,
        }
    }
}

impl Intake<ReturnRequest> for RentTransformer {
    type To = ReturnRentDto;
    fn emit(&self, input: ReturnRequest) -> Self::To {
        ReturnRentDto { id: input.id }
    }
}

impl Intake<GetRentRequest> for RentTransformer {
    type To = GetRentDto;
    fn emit(&self, input: GetRentRequest) -> Self::To {
        GetRentDto { id: input.id }
    }
}

/// `None` leaves the date to the module clock.
impl TryIntake<OverdueRequest> for RentTransformer {
    type To = Option<Date>;
    type Error = Report<KernelError>;
    fn emit(&self, input: OverdueRequest) -> Result<Self::To, Self::Error> {
        let Some(today) = input.today.filter(|t| !t.trim().is_empty()) else {
            return Ok(None);
        };
        Date::parse(today.trim(), ISO_DATE)
            .map(Some)
            .change_context(KernelError::Validation)
            .attach_printable_lazy(|| format!("today `{today}` is not a YYYY-MM-DD date"))
    }
}
