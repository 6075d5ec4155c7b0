use kernel::prelude::entity::{Book, BookStatus, DestructBook};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub copies: u32,
    pub available: u32,
    pub status: BookStatus,
    pub year: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            isbn,
            category,
            stock,
            year,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            category: category.into(),
            copies: stock.copies(),
            available: stock.available(),
            status: stock.status(),
            year: year.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    /// Raw copy count as typed; parsed and validated by the service.
    pub copies: String,
    pub year: String,
}

#[derive(Debug, Clone)]
pub struct GetBookDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct SearchBookDto {
    pub query: String,
    pub category: Option<String>,
    pub status: Option<String>,
}
