//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`.
//! User picks a sidebar entry? That's `Action::Navigate(path)`.
//! A lookup comes back? That's `Action::TitleResolved { .. }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the runtime has to carry out. No I/O and no clocks here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Duration;

use log::{debug, info, warn};

use crate::catalog::types::sort_by_start_desc;
use crate::catalog::{CatalogError, LookupOutcome, Project};
use crate::core::route::Route;
use crate::core::state::App;
use crate::core::title::LookupTicket;

#[derive(Debug)]
pub enum Action {
    /// Go to a path; the id is extracted against the detail parent.
    Navigate(String),
    FocusSearch,
    BlurSearch,
    /// The pending animation deadline fired.
    AnimationTick,
    TitleResolved {
        generation: u64,
        outcome: LookupOutcome,
    },
    /// Result of the fetch issued as `generation`.
    ProjectsLoaded {
        generation: u64,
        result: Result<Vec<Project>, CatalogError>,
    },
    Quit,
}

/// What the runtime must do after an `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SpawnLookup(LookupTicket),
    /// Load the collection, tagging the result with this fetch generation.
    FetchProjects(u64),
    /// Replace the animation deadline with `now + delay`.
    ArmTick(Duration),
    CancelTick,
    /// Project collection changed; table presentation should start over.
    ResetTable,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(path) => {
            let route = Route::parse(&path, app.header.detail_parent());
            if app.route.as_ref() == Some(&route) {
                debug!("Already at {}", route.path);
                return Effect::None;
            }
            info!("Navigating to {}", route.path);
            let ticket = app.header.navigate(&route);
            app.route = Some(route);

            if let Some(ticket) = ticket {
                Effect::SpawnLookup(ticket)
            } else if app.on_projects_page() {
                app.fetch_generation += 1;
                app.loading_projects = true;
                app.projects_error = None;
                Effect::FetchProjects(app.fetch_generation)
            } else {
                Effect::None
            }
        }
        Action::FocusSearch => {
            app.header.focus_search();
            Effect::CancelTick
        }
        Action::BlurSearch => match app.header.blur_search() {
            Some(delay) => Effect::ArmTick(delay),
            None => Effect::None,
        },
        Action::AnimationTick => match app.header.tick() {
            Some(delay) => Effect::ArmTick(delay),
            None => Effect::None,
        },
        Action::TitleResolved {
            generation,
            outcome,
        } => {
            if app.header.apply_lookup(generation, outcome) {
                debug!("Title is now {:?}", app.header.title());
            }
            Effect::None
        }
        Action::ProjectsLoaded { generation, result } => {
            if generation != app.fetch_generation {
                debug!(
                    "Discarding projects from fetch {} (latest is {})",
                    generation, app.fetch_generation
                );
                return Effect::None;
            }
            app.loading_projects = false;
            match result {
                Ok(mut projects) => {
                    sort_by_start_desc(&mut projects);
                    app.projects = projects;
                    app.projects_error = None;
                }
                Err(e) => {
                    warn!("Failed to load projects: {}", e);
                    app.projects.clear();
                    app.projects_error = Some(e.to_string());
                }
            }
            Effect::ResetTable
        }
        Action::Quit => {
            app.header.unmount();
            Effect::Quit
        }
    }
}
