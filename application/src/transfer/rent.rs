use kernel::prelude::entity::{Book, DestructRent, Rent, User};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub due_date: String,
    pub returned: bool,
}

impl From<Rent> for RentDto {
    fn from(value: Rent) -> Self {
        let DestructRent {
            id,
            user_id,
            book_id,
            due_date,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            book_id: book_id.into(),
            due_date: due_date.to_string(),
            returned: status.is_returned(),
        }
    }
}

/// A rent joined with the book and member it points at.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RentDetailDto {
    pub id: Uuid,
    pub book_id: Uuid,
    pub book_title: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub due_date: String,
    pub returned: bool,
    /// `Returned` or `Not Returned`.
    pub status: String,
}

impl RentDetailDto {
    pub(crate) fn join(rent: &Rent, book: &Book, user: &User) -> Self {
        Self {
            id: *rent.id().as_ref(),
            book_id: *book.id().as_ref(),
            book_title: book.title().as_ref().clone(),
            user_id: *user.id().as_ref(),
            user_name: user.name().as_ref().clone(),
            due_date: rent.due_date().to_string(),
            returned: rent.status().is_returned(),
            status: rent.status().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateRentDto {
    pub user_id: Option<Uuid>,
    pub book_id: Option<Uuid>,
    /// `YYYY-MM-DD`.
    pub due_date: String,
}

#[derive(Debug, Clone)]
pub struct ReturnRentDto {
    pub id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetRentDto {
    pub id: Uuid,
}
