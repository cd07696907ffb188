// src/lib.rs

//! Orderdesk: order intake and admin storage for a custom apparel storefront.
//!
//! The crate keeps every entity as one JSON array per document and offers:
//!  - An `Order` model that carries arbitrary client fields next to the
//!    server-assigned id, status and timestamps.
//!  - A `DocumentStore` trait with file, remote blob and in-memory backends.
//!  - Repositories doing whole-document read/modify/write for orders and users.
//!  - Listing queries (status filter, text search, recency sort, pagination).
//!  - Dashboard statistics and CSV/JSON export.
//!
//! There is no locking across writers: two concurrent writes to the same
//! document can lose one of the updates.

pub mod dashboard;
pub mod error;
pub mod export;
pub mod model;
pub mod query;
pub mod repository;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::dashboard::{summarize, DashboardStats, DashboardSummary, RECENT_ORDER_COUNT};
pub use crate::error::{OrderDeskError, OrderDeskResult};
pub use crate::export::ExportFormat;
pub use crate::model::{Order, User};
pub use crate::query::{OrderPage, OrderQuery, Pagination};
pub use crate::repository::{OrderRepository, UserRepository};
pub use crate::store::{BlobStore, BlobStoreConfig, Document, DocumentStore, FileStore, MemoryStore};
