use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Condvar, Mutex, PoisonError};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Book, Rent, User};
use kernel::KernelError;

use crate::error::ConvertError;

pub use self::{book::*, rent::*, user::*};

mod book;
mod rent;
mod user;

/// The three tables, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub(in crate::database) books: Vec<Book>,
    pub(in crate::database) users: Vec<User>,
    pub(in crate::database) rents: Vec<Rent>,
}

#[derive(Debug)]
struct Store {
    // `None` while a transaction has the tables checked out.
    tables: Mutex<Option<Tables>>,
    released: Condvar,
}

impl Store {
    fn check_out(&self) -> error_stack::Result<Tables, KernelError> {
        let mut guard = self.tables.lock().convert_error()?;
        loop {
            if let Some(tables) = guard.take() {
                return Ok(tables);
            }
            guard = self.released.wait(guard).convert_error()?;
        }
    }

    fn check_in(&self, tables: Tables) {
        // Whole tables are put back, so a poisoned guard holds nothing worth keeping.
        let mut guard = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(tables);
        self.released.notify_one();
    }
}

/// Volatile storage for books, users and rents.
///
/// Every transaction works on a private copy of the tables while holding them
/// exclusively; other callers of `transact` wait until it commits or rolls back.
/// Opening a second transaction on the thread that holds the first never returns.
#[derive(Debug, Clone)]
pub struct InMemoryDatabase {
    store: Arc<Store>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store {
                tables: Mutex::new(Some(Tables::default())),
                released: Condvar::new(),
            }),
        }
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseConnection<InMemoryTransaction> for InMemoryDatabase {
    fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        let snapshot = self.store.check_out()?;
        Ok(InMemoryTransaction {
            store: Arc::clone(&self.store),
            working: snapshot.clone(),
            snapshot: Some(snapshot),
        })
    }
}

/// Exclusive handle on the tables. Dropping it without `commit` rolls back.
#[derive(Debug)]
pub struct InMemoryTransaction {
    store: Arc<Store>,
    working: Tables,
    snapshot: Option<Tables>,
}

impl Transaction for InMemoryTransaction {
    fn commit(mut self) -> error_stack::Result<(), KernelError> {
        self.snapshot = None;
        let working = std::mem::take(&mut self.working);
        self.store.check_in(working);
        Ok(())
    }

    fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        if let Some(snapshot) = self.snapshot.take() {
            self.store.check_in(snapshot);
        }
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.store.check_in(snapshot);
        }
    }
}

impl Deref for InMemoryTransaction {
    type Target = Tables;
    fn deref(&self) -> &Self::Target {
        &self.working
    }
}

impl DerefMut for InMemoryTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.working
    }
}
