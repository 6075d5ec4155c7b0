use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserEmail, UserId, UserKind, UserName, UserPhone};
use kernel::KernelError;

use crate::transfer::{CreateUserDto, GetUserDto, UserDto};
use crate::validate::require_text;

pub trait GetUserService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
    fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let user = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(dto.id))?;
        Ok(user.map(UserDto::from))
    }

    fn get_all_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;
        let users = self.user_query().find_all(&mut connection)?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

impl<Connection: Transaction, T> GetUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
}

pub trait CreateUserService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserModifier<Connection>
{
    fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let name = require_text("name", dto.name)?;
        let email = require_text("email", dto.email)?;
        let phone = require_text("phone", dto.phone)?;

        let user = User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new(name),
            UserEmail::new(email),
            UserPhone::new(phone),
            UserKind::new(dto.kind),
        );

        let mut connection = self.database_connection().transact()?;
        self.user_modifier().create(&mut connection, &user)?;
        connection.commit()?;

        tracing::info!(user_id = %user.id().as_ref(), "member added");
        Ok(UserDto::from(user))
    }
}

impl<Connection: Transaction, T> CreateUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
}
