//! # Stockroom Architecture
//!
//! Stockroom is a small inventory manager driven by a text menu. The user moves
//! between screens by typing option tokens (`view`, `add`, `edit`, ...) and edits
//! records with short comma-separated lines (`Hammer, 2`, `3, +1`).
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs + cli/)                                    │
//! │  - Flags, config, logging, stdin/stdout, exit codes         │
//! │  - Opens the store connection and hands it to the session   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Render, read one line, dispatch, until Exit              │
//! │  - Generic over BufRead/Write                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu (menu/) + Rendering (render.rs)                       │
//! │  - State table, input parsing, dispatch                     │
//! │  - Pure text rendering of screens and tables                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait + Connection guard                  │
//! │  - InMemoryStore                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Coupling is one-directional: the menu calls the backend, the backend never
//! calls back. Backend and input errors are contained in the menu, which
//! routes the user to the invalid-entry screen and then back to the main menu.
//! Only I/O failures on the terminal channels leave the session.
//!
//! ## Module Overview
//!
//! - [`store`]: Storage abstraction, scoped connection, in-memory backend
//! - [`menu`]: Menu states, input parsing and the state machine
//! - [`render`]: Screen, table and message formatting
//! - [`session`]: The interactive loop
//! - [`model`]: Core data types (`InventoryItem`, ids, record snapshots)
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod model;
pub mod render;
pub mod session;
pub mod store;
