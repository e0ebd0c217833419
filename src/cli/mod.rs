mod reset;
mod server;

pub use reset::reset;
pub use server::serve;
