//! # HeaderBar Component
//!
//! Page title on the left, plus the detail tabs row on project detail pages.
//!
//! ## Stateless Component
//!
//! HeaderBar is purely presentational. The title comes from the core
//! `Header` (which may still be waiting on a lookup); the component just
//! renders whatever string it is given:
//!
//! ```rust,ignore
//! let mut bar = HeaderBar::new(app.header.title().to_string(), app.on_detail_page());
//! bar.render(frame, title_area);
//! ```
//!
//! The search box sits beside it and is a separate component, since it owns
//! the query buffer and focus handling.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Tabs shown under the title on detail pages. The first is the active one.
pub const DETAIL_TABS: [&str; 3] = ["Details", "Contractor", "Quotations"];

pub struct HeaderBar {
    /// Resolved page title
    pub title: String,
    /// Whether to show the detail tabs row
    pub show_tabs: bool,
}

impl HeaderBar {
    pub fn new(title: String, show_tabs: bool) -> Self {
        Self { title, show_tabs }
    }

    /// Rows needed: one for the title, one more for tabs.
    pub fn height(show_tabs: bool) -> u16 {
        if show_tabs { 2 } else { 1 }
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, tab) in DETAIL_TABS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == 0 {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(*tab, style));
        }
        Line::from(spans)
    }
}

impl Component for HeaderBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, tabs_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let title = Paragraph::new(Span::styled(
            self.title.clone(),
            Style::default()
                .fg(Color::Indexed(54))
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, title_area);

        if self.show_tabs && tabs_area.height > 0 {
            let [tabs, sync] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(10)]).areas(tabs_area);
            frame.render_widget(Paragraph::new(self.tabs_line()), tabs);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    " Sync ⟳ ",
                    Style::default().fg(Color::White).bg(Color::Black),
                )),
                sync,
            );
        }
    }
}
