#![forbid(unsafe_code)]

pub mod json_file;
pub mod session_repo;
pub mod store;

pub use json_file::{JsonFileStore, StoreOpenError};
pub use session_repo::SessionRepository;
pub use store::{InMemoryStore, SessionStore};
