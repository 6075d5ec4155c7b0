use std::collections::HashMap;

use time::Date;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnRentQuery, DependOnUserQuery, RentQuery, UserQuery,
};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnRentModifier, RentModifier,
};
use kernel::prelude::entity::{Book, BookId, Rent, RentDueDate, RentId, User, UserId};
use kernel::KernelError;

use crate::transfer::{CreateRentDto, GetRentDto, RentDetailDto, RentDto, ReturnRentDto};
use crate::validate::{not_found, require_id, require_text};

pub trait RentService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnUserQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnRentModifier<Connection>
{
    /// Lends one copy of a book to a member until the due date.
    fn rent_book(&self, dto: CreateRentDto) -> error_stack::Result<RentDto, KernelError> {
        let user_id = UserId::new(require_id("user_id", dto.user_id)?);
        let book_id = BookId::new(require_id("book_id", dto.book_id)?);
        let due_date = RentDueDate::parse(&require_text("due_date", dto.due_date)?)?;

        let mut connection = self.database_connection().transact()?;

        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &book_id)?
            .ok_or_else(|| not_found("book", book_id.as_ref()))?;
        self.user_query()
            .find_by_id(&mut connection, &user_id)?
            .ok_or_else(|| not_found("user", user_id.as_ref()))?;

        if let Err(report) = book.lend() {
            tracing::warn!(book_id = %book_id.as_ref(), "issue refused, no copy left");
            return Err(report);
        }
        let rent = Rent::new(RentId::new(Uuid::new_v4()), user_id, book_id, due_date);

        self.book_modifier().update(&mut connection, &book)?;
        self.rent_modifier().create(&mut connection, &rent)?;
        connection.commit()?;

        tracing::info!(
            rent_id = %rent.id().as_ref(),
            book_id = %book_id.as_ref(),
            available = book.stock().available(),
            "book issued"
        );
        Ok(RentDto::from(rent))
    }
}

impl<Connection: Transaction, T> RentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnUserQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnRentModifier<Connection>
{
}

pub trait ReturnService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentQuery<Connection>
    + DependOnBookQuery<Connection>
    + DependOnRentModifier<Connection>
    + DependOnBookModifier<Connection>
{
    fn return_book(&self, dto: ReturnRentDto) -> error_stack::Result<RentDto, KernelError> {
        let id = RentId::new(dto.id);
        let mut connection = self.database_connection().transact()?;

        let mut rent = self
            .rent_query()
            .find_by_id(&mut connection, &id)?
            .ok_or_else(|| not_found("rent", id.as_ref()))?;
        rent.mark_returned()?;
        self.rent_modifier().update(&mut connection, &rent)?;

        // The book may be gone; the rent is still closed.
        match self.book_query().find_by_id(&mut connection, rent.book_id())? {
            Some(mut book) => {
                book.restore()?;
                self.book_modifier().update(&mut connection, &book)?;
            }
            None => {
                tracing::warn!(
                    rent_id = %id.as_ref(),
                    book_id = %rent.book_id().as_ref(),
                    "returned rent points at a missing book"
                );
            }
        }
        connection.commit()?;

        tracing::info!(rent_id = %id.as_ref(), "book returned");
        Ok(RentDto::from(rent))
    }
}

impl<Connection: Transaction, T> ReturnService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentQuery<Connection>
        + DependOnBookQuery<Connection>
        + DependOnRentModifier<Connection>
        + DependOnBookModifier<Connection>
{
}

pub trait GetRentService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentQuery<Connection>
    + DependOnBookQuery<Connection>
    + DependOnUserQuery<Connection>
{
    fn get_rent(&self, dto: GetRentDto) -> error_stack::Result<Option<RentDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let rent = self
            .rent_query()
            .find_by_id(&mut connection, &RentId::new(dto.id))?;
        Ok(rent.map(RentDto::from))
    }

    /// Unreturned rents with their book and member.
    ///
    /// A rent whose book or member cannot be found is reported as its own
    /// `NotFound` entry; the remaining rows are still listed.
    fn get_active_rents(
        &self,
    ) -> error_stack::Result<Vec<error_stack::Result<RentDetailDto, KernelError>>, KernelError>
    {
        self.get_rent_details(|rent| rent.is_active())
    }

    fn get_overdue_rents(
        &self,
        today: Date,
    ) -> error_stack::Result<Vec<error_stack::Result<RentDetailDto, KernelError>>, KernelError>
    {
        self.get_rent_details(|rent| rent.is_overdue(&today))
    }

    /// Every rent ever issued, oldest first, labelled `Returned` or `Not Returned`.
    fn get_rent_history(
        &self,
    ) -> error_stack::Result<Vec<error_stack::Result<RentDetailDto, KernelError>>, KernelError>
    {
        self.get_rent_details(|_| true)
    }

    #[doc(hidden)]
    fn get_rent_details<F>(
        &self,
        predicate: F,
    ) -> error_stack::Result<Vec<error_stack::Result<RentDetailDto, KernelError>>, KernelError>
    where
        F: Fn(&Rent) -> bool,
    {
        let mut connection = self.database_connection().transact()?;
        let rents = self.rent_query().find_all(&mut connection)?;
        let books = self
            .book_query()
            .find_all(&mut connection)?
            .into_iter()
            .map(|book| (*book.id(), book))
            .collect::<HashMap<BookId, Book>>();
        let users = self
            .user_query()
            .find_all(&mut connection)?
            .into_iter()
            .map(|user| (*user.id(), user))
            .collect::<HashMap<UserId, User>>();

        Ok(rents
            .iter()
            .filter(|rent| predicate(rent))
            .map(|rent| join(rent, &books, &users))
            .collect())
    }
}

impl<Connection: Transaction, T> GetRentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentQuery<Connection>
        + DependOnBookQuery<Connection>
        + DependOnUserQuery<Connection>
{
}

fn join(
    rent: &Rent,
    books: &HashMap<BookId, Book>,
    users: &HashMap<UserId, User>,
) -> error_stack::Result<RentDetailDto, KernelError> {
    let book = books
        .get(rent.book_id())
        .ok_or_else(|| not_found("book", rent.book_id().as_ref()));
    let user = users
        .get(rent.user_id())
        .ok_or_else(|| not_found("user", rent.user_id().as_ref()));

    let report = match (book, user) {
        (Ok(book), Ok(user)) => return Ok(RentDetailDto::join(rent, book, user)),
        (Err(mut book), Err(user)) => {
            book.extend_one(user);
            book
        }
        (Err(report), Ok(_)) | (Ok(_), Err(report)) => report,
    };
    tracing::warn!(rent_id = %rent.id().as_ref(), "rent has a dangling reference");
    Err(report.attach_printable(format!("rent {}", rent.id().as_ref())))
}
