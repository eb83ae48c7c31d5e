//! SQLite database management

mod connection;
mod session;
mod settings;

pub use connection::Database;
pub use session::*;
pub use settings::*;
