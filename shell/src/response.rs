use serde::Serialize;
use serde_json::Value;

use crate::error::ErrorResponse;

mod book;
mod rent;
mod report;
mod user;

pub use self::{book::*, rent::*, report::*, user::*};

/// One line written back to the console.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reply {
    Ok { data: Value },
    Error(ErrorResponse),
}
