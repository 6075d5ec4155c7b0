use crate::database::Transaction;
use crate::entity::{Rent, RentId};
use crate::KernelError;

pub trait RentQuery<Connection: Transaction>: Sync + Send + 'static {
    fn find_by_id(
        &self,
        con: &mut Connection,
        id: &RentId,
    ) -> error_stack::Result<Option<Rent>, KernelError>;

    /// Every rent ever issued, returned ones included, oldest first.
    fn find_all(&self, con: &mut Connection) -> error_stack::Result<Vec<Rent>, KernelError>;
}

pub trait DependOnRentQuery<Connection: Transaction>: Sync + Send + 'static {
    type RentQuery: RentQuery<Connection>;
    fn rent_query(&self) -> &Self::RentQuery;
}
