//! # Sidebar Component
//!
//! Fixed navigation list on the left edge.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState` and tracks the keyboard selection
//! - `Sidebar` is created each frame with the current path as a prop

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        href: "/explore",
        label: "Explore",
        icon: "◎",
    },
    NavItem {
        href: "/contractors",
        label: "Contractors",
        icon: "☷",
    },
    NavItem {
        href: "/projects",
        label: "Projects",
        icon: "▤",
    },
    NavItem {
        href: "/users",
        label: "Users",
        icon: "☺",
    },
];

pub const SIDEBAR_WIDTH: u16 = 18;

/// Index of the entry whose href prefixes `path`, if any.
pub fn active_index(path: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| path.starts_with(item.href))
}

/// Persistent keyboard selection for the sidebar.
pub struct SidebarState {
    pub selected: usize,
    pub list_state: ListState,
}

impl SidebarState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Moves the selection onto the entry for `path`, if there is one.
    pub fn follow(&mut self, path: &str) {
        if let Some(i) = active_index(path) {
            self.selected = i;
            self.list_state.select(Some(i));
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    Navigate(&'static str),
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Down => {
                self.selected = (self.selected + 1).min(NAV_ITEMS.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(SidebarEvent::Navigate(NAV_ITEMS[self.selected].href)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    state: &'a mut SidebarState,
    current_path: &'a str,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a mut SidebarState, current_path: &'a str, focused: bool) -> Self {
        Self {
            state,
            current_path,
            focused,
        }
    }
}

impl<'a> Component for Sidebar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let active = active_index(self.current_path);

        let items: Vec<ListItem> = NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if active == Some(i) {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Indexed(103))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", item.icon), style),
                    Span::styled(item.label, style),
                ]))
            })
            .collect();

        let block = Block::default()
            .style(Style::default().bg(Color::Indexed(17)))
            .padding(Padding::vertical(1));

        let mut list = List::new(items).block(block);
        if self.focused {
            list = list.highlight_symbol("›");
        } else {
            list = list.highlight_symbol(" ");
        }

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
