mod due_date;
mod id;
mod status;

pub use self::{due_date::*, id::*, status::*};
use destructure::Destructure;
use error_stack::Report;
use time::Date;
use vodca::References;

use crate::entity::{BookId, UserId};
use crate::KernelError;

/// One member borrowing one copy of a book until `due_date`.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Rent {
    id: RentId,
    user_id: UserId,
    book_id: BookId,
    due_date: RentDueDate,
    status: RentStatus,
}

impl Rent {
    pub fn new(id: RentId, user_id: UserId, book_id: BookId, due_date: RentDueDate) -> Self {
        Self {
            id,
            user_id,
            book_id,
            due_date,
            status: RentStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.status.is_returned()
    }

    pub fn is_overdue(&self, today: &Date) -> bool {
        self.is_active() && self.due_date.is_before(today)
    }

    pub fn mark_returned(&mut self) -> error_stack::Result<(), KernelError> {
        if self.status.is_returned() {
            return Err(Report::new(KernelError::AlreadyReturned)
                .attach_printable(format!("rent {}", self.id.as_ref())));
        }
        self.status = RentStatus::Returned;
        Ok(())
    }
}
