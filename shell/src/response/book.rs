use application::transfer::BookDto;
use kernel::prelude::entity::BookStatus;
use serde::Serialize;
use uuid::Uuid;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Uuid,
    title: String,
    author: String,
    isbn: String,
    category: String,
    copies: u32,
    available: u32,
    status: BookStatus,
    year: String,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author,
            isbn: value.isbn,
            category: value.category,
            copies: value.copies,
            available: value.available,
            status: value.status,
            year: value.year,
        }
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Vec<BookResponse>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        input.into_iter().map(BookResponse::from).collect()
    }
}
