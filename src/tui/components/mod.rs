//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `HeaderBar`: page title plus the detail tabs row
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: query buffer with the animated placeholder
//! - `SidebarState` / `Sidebar`: navigation list
//! - `ProjectTableState` / `ProjectTable`: paginated projects page
//!
//! Stateful components that need data they don't own use the persistent
//! state + transient wrapper pattern: the `*State` struct lives in `TuiState`
//! and handles events, the wrapper is built each frame with borrowed props.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! HeaderBar::new(app.header.title().to_string(), app.on_detail_page()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! header_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── header_bar.rs     (Title + detail tabs)
//! ├── search_box.rs     (Search field)
//! ├── sidebar.rs        (Navigation)
//! └── project_table.rs  (Projects page)
//! ```

pub mod header_bar;
pub mod project_table;
pub mod search_box;
pub mod sidebar;

pub use header_bar::HeaderBar;
pub use project_table::{ProjectTable, ProjectTableState, TableEvent};
pub use search_box::{SearchBox, SearchEvent};
pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
