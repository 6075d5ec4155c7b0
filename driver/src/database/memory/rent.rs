use error_stack::Report;

use kernel::interface::query::RentQuery;
use kernel::interface::update::RentModifier;
use kernel::prelude::entity::{Rent, RentId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryRentRepository;

impl RentQuery<InMemoryTransaction> for InMemoryRentRepository {
    fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &RentId,
    ) -> error_stack::Result<Option<Rent>, KernelError> {
        Ok(con.rents.iter().find(|rent| rent.id() == id).cloned())
    }

    fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        Ok(con.rents.clone())
    }
}

impl RentModifier<InMemoryTransaction> for InMemoryRentRepository {
    fn create(
        &self,
        con: &mut InMemoryTransaction,
        rent: &Rent,
    ) -> error_stack::Result<(), KernelError> {
        if con.rents.iter().any(|row| row.id() == rent.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("rent {} already exists", rent.id().as_ref())));
        }
        con.rents.push(rent.clone());
        Ok(())
    }

    fn update(
        &self,
        con: &mut InMemoryTransaction,
        rent: &Rent,
    ) -> error_stack::Result<(), KernelError> {
        let row = con
            .rents
            .iter_mut()
            .find(|row| row.id() == rent.id())
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("rent {} is not stored", rent.id().as_ref()))
            })?;
        *row = rent.clone();
        Ok(())
    }
}
