//! # Catalog Architecture
//!
//! Catalog is a small **product-catalog library** persisted as one JSON file,
//! with a command-line client on top. The library never assumes a terminal:
//! the same core could sit behind an HTTP handler.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Commands (commands/*.rs)              │
//! │  - Parses textual ids and prices                            │
//! │  - One `run` per operation, returning `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service (service.rs) → Repository (repository.rs)          │
//! │  - Payload validation, partial updates                      │
//! │  - Price filter, error translation per layer                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductStore trait over a raw StorageBackend             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns plain Rust
//! types, never prints and never exits. Diagnostics go through `tracing`; the
//! library never installs a subscriber.
//!
//! ## Testing Strategy
//!
//! 1. **Store**: identifier assignment, uniqueness and failure mapping against
//!    the in-memory backend, which can simulate read and write failures.
//! 2. **Repository / Service / Commands**: error translation and behavior,
//!    still in memory.
//! 3. **API**: input parsing and dispatch.
//! 4. **Integration** (`tests/`): the real file backend under `tempfile`, and
//!    the binary end to end with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`service`] / [`repository`]: Adapters between commands and the store
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product` and `ProductPatch`
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and context wiring
//! - [`error`]: Error types, one per layer

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;
