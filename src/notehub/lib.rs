//! # Notehub Architecture
//!
//! Notehub is a **UI-agnostic publishing workflow** for a markdown note
//! vault: it finds notes marked `isPublished`, validates their required
//! header fields, and moves the chosen ones into a public folder (and
//! back). The CLI is one client of the core, not the core itself.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders output, drives the             │
//! │    interactive confirmation loop                            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Threads the loaded configuration into each call          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: scan, publish, unpublish, config    │
//! │  - Returns structured Result types, never touches a         │
//! │    terminal                                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract VaultStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr or calls
//! `std::process::exit`. The interactive selection state lives in
//! [`session::PublishSession`], a pure state machine the CLI drives;
//! it can be tested without a terminal.
//!
//! ## Failure model
//!
//! Validation problems are data (`Eligibility.errors`), not errors.
//! Storage failures during a batch are caught per note and reported by
//! name; the batch continues. Nothing here is transactional: a header
//! stamp followed by a failed move leaves the note partially
//! transitioned, which the summary count makes visible.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`session`]: Selection state for the publish confirmation cycle
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `Header`, `Eligibility`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
