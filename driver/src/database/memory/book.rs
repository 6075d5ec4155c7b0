use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryBookRepository;

impl BookQuery<InMemoryTransaction> for InMemoryBookRepository {
    fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.books.iter().find(|book| book.id() == id).cloned())
    }

    fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.books.clone())
    }
}

impl BookModifier<InMemoryTransaction> for InMemoryBookRepository {
    fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        if con.books.iter().any(|row| row.id() == book.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("book {} already exists", book.id().as_ref())));
        }
        con.books.push(book.clone());
        Ok(())
    }

    fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        let row = con
            .books
            .iter_mut()
            .find(|row| row.id() == book.id())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {} is not stored", book.id().as_ref()))
            })?;
        *row = book.clone();
        Ok(())
    }
}
