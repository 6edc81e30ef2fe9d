//! # traitsim Dataset
//!
//! Profile batch loading for traitsim.
//!
//! The engine in `traitsim-core` assumes a validated batch: unique ids and
//! one shared, non-empty trait-name set. This crate is the collaborator
//! that enforces those invariants while reading JSON input, and it bundles
//! a small demo batch for out-of-the-box runs.
//!
//! ## Example
//!
//! ```rust
//! use traitsim_dataset::{demo_profiles, profiles_from_json};
//!
//! let demo = demo_profiles().unwrap();
//! assert_eq!(demo.len(), 8);
//!
//! let batch = profiles_from_json(r#"[
//!     {"id": "a", "name": "A", "scores": {"trust": 0.8}},
//!     {"id": "b", "name": "B", "scores": {"trust": 0.3}}
//! ]"#).unwrap();
//! assert_eq!(batch.len(), 2);
//! ```

pub mod demo;
pub mod loader;

pub use demo::{demo_profiles, DEMO_PROFILES_JSON, DEMO_TRAITS};
pub use loader::{load_profiles, profiles_from_json, validate_batch, DatasetError, Result};
