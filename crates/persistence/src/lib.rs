//! Loyalty Persistence - Local session storage and token encryption

pub mod encryption;
pub mod session;
pub mod sqlite;

pub use encryption::derive_machine_key;
pub use encryption::SessionCipher;
pub use session::SessionStore;
pub use sqlite::Database;
