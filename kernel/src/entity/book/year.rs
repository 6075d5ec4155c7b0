use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookYear(String);

impl BookYear {
    pub fn new(year: impl Into<String>) -> Self {
        Self(year.into())
    }
}
