mod author;
mod category;
mod id;
mod isbn;
mod stock;
mod title;
mod year;

pub use self::{author::*, category::*, id::*, isbn::*, stock::*, title::*, year::*};
use destructure::Destructure;
use vodca::References;

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    isbn: BookIsbn,
    category: BookCategory,
    stock: BookStock,
    year: BookYear,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        isbn: BookIsbn,
        category: BookCategory,
        stock: BookStock,
        year: BookYear,
    ) -> Self {
        Self {
            id,
            title,
            author,
            isbn,
            category,
            stock,
            year,
        }
    }

    /// Hands one copy to a borrower.
    pub fn lend(&mut self) -> error_stack::Result<(), KernelError> {
        self.stock
            .take_one()
            .map_err(|report| report.attach_printable(format!("book {}", self.id.as_ref())))
    }

    /// Puts one lent copy back on the shelf.
    pub fn restore(&mut self) -> error_stack::Result<(), KernelError> {
        self.stock
            .put_back()
            .map_err(|report| report.attach_printable(format!("book {}", self.id.as_ref())))
    }

    /// Free-text match used by the catalog search.
    ///
    /// Title and author compare case-insensitively, the isbn as written.
    pub fn matches(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();
        self.title.as_ref().to_lowercase().contains(&lowered)
            || self.author.as_ref().to_lowercase().contains(&lowered)
            || self.isbn.as_ref().contains(query)
    }
}
