mod book;
mod rent;
mod user;

pub use self::{book::*, rent::*, user::*};
