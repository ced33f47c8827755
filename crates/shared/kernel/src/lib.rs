//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for IDs, config loading,
//! and the shared server state.
//!
//! ## Identifiers
//! Use [`oid::ObjectId`] for store-assigned record identifiers:
//! ```rust
//! # use roster_kernel::oid::ObjectId;
//! let id = ObjectId::generate();
//! assert_eq!(id.as_str().len(), 24);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use roster_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("server")).unwrap();
//! ```

pub mod config;
pub mod oid;
pub mod prelude;
pub mod server;

pub use roster_domain as domain;
