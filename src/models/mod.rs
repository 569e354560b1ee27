//! Data models for the book inventory

pub mod author;
pub mod book;
pub mod dump;
pub mod instance;
pub mod lookup;
pub mod reader;
pub mod user;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use dump::DumpRecord;
pub use instance::{Instance, InstanceStatus};
pub use lookup::{Genre, Language, Production};
pub use reader::Reader;
pub use user::{Admin, User};
