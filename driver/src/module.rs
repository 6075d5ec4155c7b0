use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{DependOnBookQuery, DependOnRentQuery, DependOnUserQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnRentModifier, DependOnUserModifier};
use kernel::KernelError;

use crate::clock::LocalClock;
use crate::database::{
    InMemoryBookRepository, InMemoryDatabase, InMemoryRentRepository, InMemoryTransaction,
    InMemoryUserRepository,
};

/// Wires the in-memory tables and the clock into every application service.
#[derive(Debug, Clone)]
pub struct LibraryModule {
    database: InMemoryDatabase,
    clock: LocalClock,
}

impl LibraryModule {
    pub fn new(clock: LocalClock) -> Self {
        Self {
            database: InMemoryDatabase::new(),
            clock,
        }
    }

    pub fn init() -> error_stack::Result<Self, KernelError> {
        let clock = LocalClock::from_env()?;
        tracing::debug!(?clock, "library module ready");
        Ok(Self::new(clock))
    }
}

impl DependOnDatabaseConnection<InMemoryTransaction> for LibraryModule {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnClock for LibraryModule {
    type Clock = LocalClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnBookQuery<InMemoryTransaction> for LibraryModule {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnUserQuery<InMemoryTransaction> for LibraryModule {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}

impl DependOnRentQuery<InMemoryTransaction> for LibraryModule {
    type RentQuery = InMemoryRentRepository;
    fn rent_query(&self) -> &Self::RentQuery {
        &InMemoryRentRepository
    }
}

impl DependOnBookModifier<InMemoryTransaction> for LibraryModule {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

impl DependOnUserModifier<InMemoryTransaction> for LibraryModule {
    type UserModifier = InMemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &InMemoryUserRepository
    }
}

impl DependOnRentModifier<InMemoryTransaction> for LibraryModule {
    type RentModifier = InMemoryRentRepository;
    fn rent_modifier(&self) -> &Self::RentModifier {
        &InMemoryRentRepository
    }
}
