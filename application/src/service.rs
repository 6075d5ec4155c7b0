mod book;
mod rent;
mod report;
mod user;

pub use self::{book::*, rent::*, report::*, user::*};
