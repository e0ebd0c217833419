pub mod password;
pub mod session;

mod root;

pub use root::*;
