use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Book, BookAuthor, BookCategory, BookId, BookIsbn, BookStatus, BookStock, BookTitle, BookYear,
};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, GetBookDto, SearchBookDto};
use crate::validate::require_text;

pub trait GetBookService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id)?;

        Ok(book.map(BookDto::from))
    }

    fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let books = self.book_query().find_all(&mut connection)?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: Transaction, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

pub trait SearchBookService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    /// Filters the catalog, keeping insertion order.
    ///
    /// An empty query matches every book; `category` and `status` narrow further
    /// when given.
    fn search_books(&self, dto: SearchBookDto) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let SearchBookDto {
            query,
            category,
            status,
        } = dto;
        let category = category
            .filter(|category| !category.is_empty())
            .map(BookCategory::new);
        let status = status
            .filter(|status| !status.is_empty())
            .map(|status| BookStatus::parse(&status))
            .transpose()?;

        let mut connection = self.database_connection().transact()?;
        let books = self.book_query().find_all(&mut connection)?;

        let found = books
            .into_iter()
            .filter(|book| book.matches(&query))
            .filter(|book| category.as_ref().map_or(true, |c| book.category() == c))
            .filter(|book| status.map_or(true, |s| book.stock().status() == s))
            .map(BookDto::from)
            .collect::<Vec<_>>();
        tracing::debug!(query = %query, hits = found.len(), "searched catalog");
        Ok(found)
    }
}

impl<Connection: Transaction, T> SearchBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

pub trait CreateBookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookModifier<Connection>
{
    fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let title = require_text("title", dto.title)?;
        let author = require_text("author", dto.author)?;
        let isbn = require_text("isbn", dto.isbn)?;
        let category = require_text("category", dto.category)?;
        let stock = BookStock::parse(&dto.copies)?;

        let book = Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::new(title),
            BookAuthor::new(author),
            BookIsbn::new(isbn),
            BookCategory::new(category),
            stock,
            BookYear::new(dto.year),
        );

        let mut connection = self.database_connection().transact()?;
        self.book_modifier().create(&mut connection, &book)?;
        connection.commit()?;

        tracing::info!(book_id = %book.id().as_ref(), copies = stock.copies(), "book added");
        Ok(BookDto::from(book))
    }
}

impl<Connection: Transaction, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}
