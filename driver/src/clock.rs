use error_stack::Report;
use time::{Date, OffsetDateTime};

use kernel::interface::clock::Clock;
use kernel::prelude::entity::ISO_DATE;
use kernel::KernelError;

use crate::env;

static LIBRARY_TODAY: &str = "LIBRARY_TODAY";

/// Source of "today" for overdue checks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LocalClock {
    /// Current UTC date.
    System,
    /// Pinned date, for demos and tests.
    Fixed(Date),
}

impl LocalClock {
    /// Honours `LIBRARY_TODAY=YYYY-MM-DD`, otherwise follows the system date.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let Some(today) = env(LIBRARY_TODAY)? else {
            return Ok(Self::System);
        };
        let date = Date::parse(today.trim(), ISO_DATE).map_err(|error| {
            Report::new(error)
                .change_context(KernelError::Validation)
                .attach_printable(format!("{LIBRARY_TODAY} must be YYYY-MM-DD, got {today:?}"))
        })?;
        Ok(Self::Fixed(date))
    }
}

impl Clock for LocalClock {
    fn today(&self) -> Date {
        match self {
            LocalClock::System => OffsetDateTime::now_utc().date(),
            LocalClock::Fixed(date) => *date,
        }
    }
}
