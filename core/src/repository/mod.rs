// core/src/repository/mod.rs

//! Typed access to the order and user documents.
//!
//! Every mutation reads the whole document, changes it in memory and writes it
//! back. Concurrent mutations of the same document are last-writer-wins.

pub mod orders;
pub mod users;

pub use orders::OrderRepository;
pub use users::UserRepository;
