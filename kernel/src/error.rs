use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    Validation,
    NotFound,
    Unavailable,
    AlreadyReturned,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Required input is missing or malformed"),
            KernelError::NotFound => write!(f, "Referenced record does not exist"),
            KernelError::Unavailable => write!(f, "No copy of the book is available"),
            KernelError::AlreadyReturned => write!(f, "Rent has already been returned"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
