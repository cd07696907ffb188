// core/src/model/mod.rs

//! Entities persisted as JSON documents.

pub mod order;
pub mod user;

pub use order::Order;
pub use user::User;
