use error_stack::Report;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryUserRepository;

impl UserQuery<InMemoryTransaction> for InMemoryUserRepository {
    fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.users.iter().find(|user| user.id() == id).cloned())
    }

    fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(con.users.clone())
    }
}

impl UserModifier<InMemoryTransaction> for InMemoryUserRepository {
    fn create(
        &self,
        con: &mut InMemoryTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        if con.users.iter().any(|row| row.id() == user.id()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("user {} already exists", user.id().as_ref())));
        }
        con.users.push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::UserQuery;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{User, UserEmail, UserId, UserKind, UserName, UserPhone};
    use kernel::KernelError;

    use crate::database::{InMemoryDatabase, InMemoryUserRepository};

    #[test]
    fn test() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact()?;
        let user_id = UserId::new(uuid::Uuid::new_v4());
        let user = User::new(
            user_id,
            UserName::new("Ada"),
            UserEmail::new("ada@example.com"),
            UserPhone::new("555-0100"),
            UserKind::new("faculty"),
        );
        InMemoryUserRepository.create(&mut con, &user)?;

        let found = InMemoryUserRepository.find_by_id(&mut con, &user_id)?;
        assert_eq!(found, Some(user));
        assert_eq!(InMemoryUserRepository.find_all(&mut con)?.len(), 1);
        Ok(())
    }
}
