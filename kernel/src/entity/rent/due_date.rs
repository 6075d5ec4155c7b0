use std::fmt::{Display, Formatter};

use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

pub const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Fromln,
    AsRefln,
    Serialize,
    Deserialize,
)]
pub struct RentDueDate(Date);

impl RentDueDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Parses a `YYYY-MM-DD` date.
    pub fn parse(date: &str) -> error_stack::Result<Self, KernelError> {
        Date::parse(date.trim(), ISO_DATE)
            .map(Self)
            .map_err(|error| {
                Report::new(error)
                    .change_context(KernelError::Validation)
                    .attach_printable(format!("expected a YYYY-MM-DD date, got {date:?}"))
            })
    }

    pub fn is_before(&self, today: &Date) -> bool {
        self.0 < *today
    }
}

impl Display for RentDueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self.0.format(ISO_DATE).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}
