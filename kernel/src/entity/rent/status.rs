use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// `Active` is the only initial state and `Returned` is terminal.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum RentStatus {
    #[default]
    Active,
    Returned,
}

impl RentStatus {
    pub fn is_returned(&self) -> bool {
        matches!(self, Self::Returned)
    }
}

impl Display for RentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RentStatus::Active => write!(f, "Not Returned"),
            RentStatus::Returned => write!(f, "Returned"),
        }
    }
}
