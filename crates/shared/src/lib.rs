mod command;
pub mod event;
pub mod user;

pub use command::*;
