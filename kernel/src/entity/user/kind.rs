use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Member category such as "student" or "faculty". Not an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct UserKind(String);

impl UserKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }
}
