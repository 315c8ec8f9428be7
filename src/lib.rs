//! # Vitrine
//!
//! A lightweight, in-memory catalog query engine for storefront data.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Combined free-text, category, and rating filtering
//! - Stable multi-key sorting (date, rating, helpfulness)
//! - Derived aggregate statistics (average rating, rating histogram)
//! - Discount and loyalty-reward computations
//!
//! Every operation is a pure function of its inputs: the engine holds no
//! state between calls, performs no I/O, and is safe to call from any
//! number of threads without coordination.

pub mod catalog;
pub mod error;
pub mod pricing;
pub mod query;
pub mod rewards;
pub mod stats;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
