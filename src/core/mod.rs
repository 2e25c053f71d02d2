//! # Core Application Logic
//!
//! This module contains the dashboard's header engine and shell state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Header (title+prompt)│
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No clocks.     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │  Headless  │
//!     │  Adapter   │      │  Adapter   │      │   tests    │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`title`]: route → page title, with generation-guarded async override
//! - [`prompt`]: the typing animation behind the search placeholder
//! - [`header`]: one header mount owning both of the above
//! - [`state`]: the `App` struct, all shell state in one place
//! - [`action`]: the `Action` enum and the `update` reducer

pub mod action;
pub mod config;
pub mod header;
pub mod pagination;
pub mod prompt;
pub mod route;
pub mod state;
pub mod title;
