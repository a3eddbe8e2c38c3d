//! # Compendium Core
//!
//! Platform-independent library behind the Compendium catalog viewer.
//!
//! The viewer lets a user search a large list of named items (each tagged with
//! one or more categories), narrow it down through a category sidebar, and
//! scroll the result as a virtualized list of chips. Everything with
//! non-trivial behaviour lives here so it can be tested without a renderer.
//!
//! ## Modules
//!
//! - [`catalog`] - Items, the immutable [`Dataset`](catalog::Dataset), item sets and sample data
//! - [`filter`] - Cancellable asynchronous name filtering
//! - [`aggregation`] - Per-category item counts
//! - [`selection`] - Search/category state machine and its derivations
//! - [`layout`] - Row partitioning, row-height cache and viewport windowing
//! - [`metrics`] - Filter run counters with rolling averages
//! - [`platform`] - Timers and blocking-work offload for native and WASM
//! - [`config`] - Compiled-in constants
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod aggregation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod metrics;
pub mod platform;
pub mod selection;
