use crate::database::Transaction;
use crate::entity::Rent;
use crate::KernelError;

pub trait RentModifier<Connection: Transaction>: 'static + Sync + Send {
    fn create(&self, con: &mut Connection, rent: &Rent) -> error_stack::Result<(), KernelError>;
    fn update(&self, con: &mut Connection, rent: &Rent) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentModifier<Connection: Transaction>: 'static + Sync + Send {
    type RentModifier: RentModifier<Connection>;
    fn rent_modifier(&self) -> &Self::RentModifier;
}
