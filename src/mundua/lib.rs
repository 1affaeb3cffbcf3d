//! # Mundua Architecture
//!
//! Mundua is a **UI-agnostic country-tracking library** with a CLI client.
//! The split matters: everything from `api.rs` inward operates on Rust
//! types and returns `Result<CmdResult>`, never touching stdout, stderr, or
//! `std::process::exit`. The same core could sit behind a TUI or a web
//! frontend without changes.
//!
//! ## The Layers
//!
//! ```text
//! CLI layer (main.rs, args.rs, print.rs)   terminal I/O, clap parsing
//!            │
//! API layer (api.rs)                       thin facade, runs the loader,
//!            │                             dispatches to commands
//! Command layer (commands/*.rs)            pure business logic
//!            │
//! Storage layer (store/)                   CountryStore trait:
//!                                          FileStore / InMemoryStore
//! ```
//!
//! ## The Data Model
//!
//! One entity: the country record ([`model::Country`]) — name (identity),
//! visiting status, optional trip date, and a capped sequence of photos
//! stored as base64 JPEG data URLs. The whole collection lives in a single
//! store slot and is replaced wholesale on every mutation.
//!
//! ## Loading Model
//!
//! Every operation goes through the bootstrap loader
//! ([`commands::load`]): use the saved collection if present, otherwise
//! seed it from a local file or URL ([`seed`]); an unparsable slot is
//! discarded and re-seeded. Seed failures degrade to an empty collection
//! with a warning — never a hard error.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of business logic against
//!    `InMemoryStore` — the lion's share of testing.
//! 2. **API** (`api.rs`): dispatch tests, not logic tests.
//! 3. **CLI**: an end-to-end test in `tests/` driving the binary with
//!    `assert_cmd` against an isolated data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Country`, `Status`)
//! - [`photo`]: The decode → scale → encode photo pipeline
//! - [`seed`]: Bootstrap seed loading (file or HTTP)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod photo;
pub mod seed;
pub mod store;
