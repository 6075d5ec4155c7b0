use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentId(Uuid);

impl RentId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
