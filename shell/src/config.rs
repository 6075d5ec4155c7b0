use std::path::PathBuf;

use error_stack::{Report, ResultExt};
use kernel::KernelError;

static LIBRARY_LOG_DIR: &str = "LIBRARY_LOG_DIR";
static DEFAULT_LOG_DIR: &str = "./logs/";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let log_dir = match dotenvy::var(LIBRARY_LOG_DIR) {
            Ok(dir) => PathBuf::from(dir),
            Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => {
                PathBuf::from(DEFAULT_LOG_DIR)
            }
            Err(error) => {
                return Err(Report::new(error))
                    .change_context(KernelError::Internal)
                    .attach_printable_lazy(|| format!("Failed to read {LIBRARY_LOG_DIR}"))
            }
        };
        Ok(Self { log_dir })
    }
}
