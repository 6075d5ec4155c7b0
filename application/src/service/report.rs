use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnRentQuery, DependOnUserQuery, RentQuery, UserQuery,
};
use kernel::KernelError;

use crate::transfer::ReportDto;

pub trait ReportService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnClock
    + DependOnBookQuery<Connection>
    + DependOnUserQuery<Connection>
    + DependOnRentQuery<Connection>
{
    /// Aggregate counts over the current tables. Nothing is cached.
    fn report(&self) -> error_stack::Result<ReportDto, KernelError> {
        let today = self.clock().today();
        let mut connection = self.database_connection().transact()?;

        let books = self.book_query().find_all(&mut connection)?;
        let users = self.user_query().find_all(&mut connection)?;
        let rents = self.rent_query().find_all(&mut connection)?;

        let report = ReportDto {
            total_books: books.len(),
            available_copies: books
                .iter()
                .map(|book| u64::from(book.stock().available()))
                .sum(),
            borrowed_copies: books
                .iter()
                .map(|book| u64::from(book.stock().borrowed()))
                .sum(),
            total_users: users.len(),
            overdue_count: rents.iter().filter(|rent| rent.is_overdue(&today)).count(),
            total_transactions: rents.len(),
        };
        tracing::debug!(?report, %today, "report computed");
        Ok(report)
    }
}

impl<Connection: Transaction, T> ReportService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnClock
        + DependOnBookQuery<Connection>
        + DependOnUserQuery<Connection>
        + DependOnRentQuery<Connection>
{
}
