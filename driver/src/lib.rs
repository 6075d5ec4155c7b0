use error_stack::{Report, ResultExt};

use kernel::KernelError;

pub mod clock;
pub mod database;
pub mod error;
pub mod module;

/// Reads a setting from the environment or `.env`; unset keys are `None`.
pub(crate) fn env(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(Report::new(error))
            .change_context(KernelError::Internal)
            .attach_printable_lazy(|| format!("Failed to read {key}")),
    }
}
