//! Compendium - catalog viewer for large component libraries.
//!
//! Search a list of named items, narrow it down by category and scroll the
//! result as a windowed list of chips. The UI is a thin Dioxus layer; the
//! filtering, aggregation, selection and layout logic lives in
//! [`compendium_core`].
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default `web` feature
//! - **Desktop**: `desktop` feature

#![forbid(unsafe_code)]

pub mod components;
