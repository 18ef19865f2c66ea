//! # Stockroom Architecture
//!
//! Stockroom keeps a small product catalog (id, name, category, quantity, price) in
//! a single JSON file. The library holds all of the catalog rules; the binary is a
//! thin client that parses arguments, renders tables and asks for confirmation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, interactive menu, table rendering           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the injected store       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, ID assignment, filter/sort/search, CRUD      │
//! │  - Returns `CmdResult` with products and leveled messages   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save the whole collection        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command loads a fresh snapshot, changes it and saves the whole
//! collection back. Nothing is cached between calls, and nothing guards against
//! two processes writing the same file at once.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product` and the input/query types around it
//! - [`config`]: Configuration file and data file resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
