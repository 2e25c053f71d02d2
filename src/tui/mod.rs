//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the shell,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Timing
//!
//! The search prompt animation has exactly one pending deadline, held in a
//! `TickSchedule`. The loop polls for input until that deadline, fires the
//! tick, and re-arms with whatever delay the tick returned. Focusing the
//! search box cancels the deadline outright; blurring arms a fresh one.
//!
//! ## Background work
//!
//! Title lookups and project fetches run as tokio tasks and report back over
//! an mpsc channel as `Action`s. Nothing is cancelled: a lookup or fetch
//! that lands after the user navigated away is dropped by its generation.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::execute;

use crate::SourceKind;
use crate::catalog::{EntityLookup, FileProjectSource, HttpProjectSource, LookupError, ProjectSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::prompt::TickSchedule;
use crate::core::state::App;
use crate::core::title::LookupTicket;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ProjectTableState, SearchBox, SearchEvent, SidebarEvent, SidebarState, TableEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Longest the loop sleeps when no animation tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);
/// A lookup still running after this long counts as failed.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Which part of the shell receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Sidebar,
    Search,
    Page,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Sidebar => Pane::Search,
            Pane::Search => Pane::Page,
            Pane::Page => Pane::Sidebar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::Sidebar => Pane::Page,
            Pane::Search => Pane::Sidebar,
            Pane::Page => Pane::Search,
        }
    }
}

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub focus: Pane,
    pub sidebar: SidebarState,
    pub search: SearchBox,
    pub table: ProjectTableState,
}

impl TuiState {
    pub fn new(page_size: usize) -> Self {
        Self {
            focus: Pane::Page,
            sidebar: SidebarState::new(),
            search: SearchBox::new(),
            table: ProjectTableState::new(page_size),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Non-blinking: avoids blink timer reset from continuous redraws
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

/// Build a project source from the resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn ProjectSource> {
    match config.source {
        SourceKind::Http => Arc::new(HttpProjectSource::new(config.projects_url.clone())),
        SourceKind::File => Arc::new(FileProjectSource::new(config.projects_file.clone())),
    }
}

/// Everything the loop mutates while dispatching, bundled for helpers.
struct Runtime {
    app: App,
    tui: TuiState,
    schedule: TickSchedule,
    tx: mpsc::Sender<Action>,
}

impl Runtime {
    /// Applies an action and carries out its effect. Returns true on quit.
    fn dispatch(&mut self, action: Action) -> bool {
        let navigated = matches!(action, Action::Navigate(_));
        let effect = update(&mut self.app, action);
        if navigated {
            self.tui.sidebar.follow(self.app.current_path());
        }

        match effect {
            Effect::Quit => {
                // Nothing may fire after teardown
                self.schedule.cancel();
                return true;
            }
            Effect::SpawnLookup(ticket) => {
                spawn_lookup(self.app.lookup.clone(), ticket, self.tx.clone());
            }
            Effect::FetchProjects(generation) => {
                spawn_fetch(self.app.source.clone(), generation, self.tx.clone());
            }
            Effect::ArmTick(delay) => self.schedule.arm(Instant::now(), delay),
            Effect::CancelTick => self.schedule.cancel(),
            Effect::ResetTable => self.tui.table.reset(self.app.projects.len()),
            Effect::None => {}
        }
        false
    }

    /// Moves keyboard focus, pausing or resuming the prompt animation when
    /// the search box is entered or left.
    fn set_focus(&mut self, pane: Pane) {
        let previous = self.tui.focus;
        if previous == pane {
            return;
        }
        self.tui.focus = pane;
        debug!("Focus {:?} → {:?}", previous, pane);

        if previous == Pane::Search {
            self.dispatch(Action::BlurSearch);
        }
        if pane == Pane::Search {
            self.dispatch(Action::FocusSearch);
        }
    }

    fn navigate(&mut self, path: String) -> bool {
        self.dispatch(Action::Navigate(path))
    }

    /// Routes one terminal event. Returns true when the app should quit.
    fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::ForceQuit => return self.dispatch(Action::Quit),
            TuiEvent::Resize => return false,
            TuiEvent::NextPane => {
                self.set_focus(self.tui.focus.next());
                return false;
            }
            TuiEvent::PrevPane => {
                self.set_focus(self.tui.focus.prev());
                return false;
            }
            _ => {}
        }

        match self.tui.focus {
            Pane::Search => {
                if event == TuiEvent::Escape {
                    self.set_focus(Pane::Page);
                    return false;
                }
                match self.tui.search.handle_event(&event) {
                    Some(SearchEvent::Submit(query)) => {
                        info!("Search submitted: {:?}", query);
                        self.app.status_message = format!("Search: {query}");
                    }
                    // Editing the query makes the last submitted one stale
                    Some(SearchEvent::ContentChanged) => self.app.status_message.clear(),
                    None => {}
                }
                false
            }
            Pane::Sidebar => match event {
                TuiEvent::Escape => self.dispatch(Action::Quit),
                TuiEvent::InputChar('/') => {
                    self.set_focus(Pane::Search);
                    false
                }
                _ => match self.tui.sidebar.handle_event(&event) {
                    Some(SidebarEvent::Navigate(href)) => {
                        let quit = self.navigate(href.to_string());
                        self.set_focus(Pane::Page);
                        quit
                    }
                    None => false,
                },
            },
            Pane::Page => match event {
                // Esc on a detail page goes back to the list first
                TuiEvent::Escape if self.app.on_detail_page() => {
                    let parent = self.app.header.detail_parent().to_string();
                    self.navigate(parent)
                }
                TuiEvent::Escape => self.dispatch(Action::Quit),
                TuiEvent::InputChar('/') => {
                    self.set_focus(Pane::Search);
                    false
                }
                _ if self.app.on_projects_page() => {
                    match self.tui.table.handle_event(&event) {
                        Some(TableEvent::Open(index)) => match self.app.projects.get(index) {
                            Some(project) => {
                                let path =
                                    format!("{}/{}", self.app.header.detail_parent(), project.id);
                                self.navigate(path)
                            }
                            None => false,
                        },
                        None => false,
                    }
                }
                _ => false,
            },
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let app = App::mount(&config.header, source)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    info!("Using {} project source", app.source.name());

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut rt = Runtime {
        app,
        tui: TuiState::new(config.page_size),
        schedule: TickSchedule::default(),
        tx,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let first_delay = rt.app.header.first_tick_delay();
    rt.schedule.arm(Instant::now(), first_delay);
    rt.navigate(config.initial_route.clone());

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &rt.app, &mut rt.tui))?;
            needs_redraw = false;
        }

        // Sleep until the next animation tick, or poll lazily when none is pending
        let timeout = rt
            .schedule
            .time_until(Instant::now())
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if rt.handle_event(event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        if rt.schedule.take_due(Instant::now()) {
            rt.dispatch(Action::AnimationTick);
            needs_redraw = true;
        }

        // Handle background task actions (lookups, fetches)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            rt.dispatch(action);
        }
    }

    if rt.app.header.is_mounted() {
        rt.dispatch(Action::Quit);
    }

    ratatui::restore();
    Ok(())
}

fn spawn_lookup(lookup: Arc<dyn EntityLookup>, ticket: LookupTicket, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning lookup of id {} (generation {})",
        ticket.id, ticket.generation
    );
    tokio::spawn(async move {
        let outcome = match tokio::time::timeout(LOOKUP_TIMEOUT, lookup.lookup(&ticket.id)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    "Lookup of id {} timed out after {:?}",
                    ticket.id, LOOKUP_TIMEOUT
                );
                Err(LookupError::Unavailable("timed out".to_string()))
            }
        };
        if tx
            .send(Action::TitleResolved {
                generation: ticket.generation,
                outcome,
            })
            .is_err()
        {
            warn!(
                "Failed to send lookup result for generation {}: receiver dropped",
                ticket.generation
            );
        }
    });
}

fn spawn_fetch(source: Arc<dyn ProjectSource>, generation: u64, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning project fetch {} from {}",
        generation,
        source.name()
    );
    tokio::spawn(async move {
        let result = source.fetch_projects().await;
        if tx
            .send(Action::ProjectsLoaded { generation, result })
            .is_err()
        {
            warn!("Failed to send project collection: receiver dropped");
        }
    });
}
