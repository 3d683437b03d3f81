//! # Tally Architecture
//!
//! Tally keeps a list of named entries, each with a whole-number quantity,
//! shows a running total, and remembers the list between sessions. Think of
//! a meal log with calories.
//!
//! Like any small app it is split into a state layer, a storage layer and a
//! view layer, glued together by a controller. The CLI is one client of that
//! controller; nothing below it knows about stdout, exit codes or terminals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, paints the document, runs the shell    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ Event
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (app.rs)                                        │
//! │  - One fixed pipeline per event                             │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!          │                   │                   │
//!          ▼                   ▼                   ▼
//! ┌────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │ records.rs     │ │ store/           │ │ view/                │
//! │ in-memory list │ │ SlotStore over a │ │ ViewRenderer over a  │
//! │ selection      │ │ SlotBackend      │ │ RenderSurface        │
//! │ total          │ │ (fs or memory)   │ │ (Document)           │
//! └────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```
//!
//! ## State Synchronization
//!
//! The same list lives in three places: the [`records::RecordStore`], the
//! durable slot behind [`store::SlotStore`], and the rows drawn by
//! [`view::ViewRenderer`]. Only the controller mutates them, and always in a
//! fixed order (see [`app`]). Selection exists only in memory.
//!
//! ## Testing Strategy
//!
//! - **Records, store, view**: unit tests next to the code, using
//!   [`store::mem_backend::MemBackend`] and [`view::Document`].
//! - **Controller**: pipeline tests in `app.rs`, property tests in
//!   `tests/properties.rs`.
//! - **Filesystem + binary**: integration tests under `tests/`.
//!
//! ## Module Overview
//!
//! - [`app`]: The controller, events and command results
//! - [`records`]: In-memory record list, selection and total
//! - [`store`]: Slot backends and the persistence adapter
//! - [`view`]: Render surface, in-memory document and renderer
//! - [`model`]: Core data types (`Record`, `RecordId`, `FormInput`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, terminal painting and the interactive shell for
//!   the binary (not part of the lib API)

pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod records;
pub mod store;
pub mod view;
