use crate::KernelError;

/// Hands out transactions over the book, user and rent tables.
///
/// Only one transaction may be open at a time; `transact` waits until the
/// previous one has been committed or rolled back.
pub trait DatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    fn transact(&self) -> error_stack::Result<Connection, KernelError>;
}

pub trait DependOnDatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection<Connection>;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

pub trait Transaction: 'static + Send {
    fn commit(self) -> error_stack::Result<(), KernelError>;
    fn roll_back(self) -> error_stack::Result<(), KernelError>;
}
