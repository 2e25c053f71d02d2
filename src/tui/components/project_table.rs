//! # ProjectTable Component
//!
//! The projects page: a paginated table of the collection, newest first.
//!
//! ```text
//!  Name              Start Date        End Date          Status   Venue
//!  Harbour Fit-out   05 March 2024     30 June 2024      Active   Pier 4
//!  …
//!  Showing 9 of 23 entries                                   [1]  2   3
//! ```
//!
//! - `ProjectTableState` lives in `TuiState` (page, selected row)
//! - `ProjectTable` is created each frame with the project slice as a prop

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use crate::catalog::Project;
use crate::catalog::types::format_date;
use crate::core::pagination::Pagination;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Status chip colors, assigned by row position.
const STATUS_COLORS: [(Color, Color); 8] = [
    (Color::Indexed(157), Color::Indexed(22)),
    (Color::Indexed(229), Color::Indexed(58)),
    (Color::Indexed(217), Color::Indexed(52)),
    (Color::Indexed(218), Color::Indexed(53)),
    (Color::Indexed(183), Color::Indexed(54)),
    (Color::Indexed(223), Color::Indexed(94)),
    (Color::Indexed(158), Color::Indexed(23)),
    (Color::Indexed(153), Color::Indexed(18)),
];

pub struct ProjectTableState {
    pub pagination: Pagination,
    /// Selected row within the current page.
    pub selected: usize,
    pub table_state: TableState,
}

impl ProjectTableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            selected: 0,
            table_state: TableState::default(),
        }
    }

    /// Starts over at page one for a freshly loaded collection.
    pub fn reset(&mut self, total: usize) {
        self.pagination.reset(total);
        self.selected = 0;
        self.table_state
            .select(if total > 0 { Some(0) } else { None });
    }

    /// Absolute index of the selected project, if the page has rows.
    pub fn selected_index(&self) -> Option<usize> {
        let range = self.pagination.range();
        let index = range.start + self.selected;
        range.contains(&index).then_some(index)
    }

    fn select_row(&mut self, row: usize) {
        self.selected = row;
        self.table_state.select(Some(row));
    }
}

/// Events emitted by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Open the project at this absolute index.
    Open(usize),
}

impl EventHandler for ProjectTableState {
    type Event = TableEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let rows = self.pagination.showing();
        match event {
            TuiEvent::Up if rows > 0 => {
                self.select_row(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::Down if rows > 0 => {
                self.select_row((self.selected + 1).min(rows - 1));
                None
            }
            TuiEvent::Left => {
                if self.pagination.prev() {
                    self.select_row(0);
                }
                None
            }
            TuiEvent::Right => {
                if self.pagination.next() {
                    self.select_row(0);
                }
                None
            }
            TuiEvent::InputChar(c) if c.is_ascii_digit() && *c != '0' => {
                let page = (*c as usize) - ('1' as usize);
                if page < self.pagination.page_count() && self.pagination.go_to(page) {
                    self.select_row(0);
                }
                None
            }
            TuiEvent::Submit => self.selected_index().map(TableEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the projects table.
pub struct ProjectTable<'a> {
    state: &'a mut ProjectTableState,
    projects: &'a [Project],
    loading: bool,
    error: Option<&'a str>,
    focused: bool,
}

impl<'a> ProjectTable<'a> {
    pub fn new(
        state: &'a mut ProjectTableState,
        projects: &'a [Project],
        loading: bool,
        error: Option<&'a str>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            projects,
            loading,
            error,
            focused,
        }
    }

    fn footer(&self) -> Line<'static> {
        let p = &self.state.pagination;
        let mut spans = vec![
            Span::raw("Showing "),
            Span::styled(
                format!(" {} ", p.showing()),
                Style::default().bg(Color::Indexed(254)).fg(Color::Black),
            ),
            Span::raw(format!(" of {} entries", p.total())),
        ];
        spans.push(Span::raw("    "));
        for page in 0..p.page_count() {
            let style = if page == p.page() {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", page + 1), style));
        }
        Line::from(spans)
    }
}

impl<'a> Component for ProjectTable<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [table_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let header_style = Style::default()
            .fg(Color::Indexed(250))
            .bg(Color::Indexed(255))
            .add_modifier(Modifier::BOLD);
        let header = Row::new(["Name", "Start Date", "End Date", "Status", "Venue"])
            .style(header_style);

        let range = self.state.pagination.range();
        let page_rows = self.projects.get(range).unwrap_or_default();

        let rows: Vec<Row> = page_rows
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let (bg, fg) = STATUS_COLORS[i % STATUS_COLORS.len()];
                Row::new(vec![
                    Cell::from(Span::styled(
                        project.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Cell::from(format_date(&project.start_date)),
                    Cell::from(format_date(&project.end_date)),
                    Cell::from(Span::styled(
                        format!(" {} ", project.status),
                        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
                    )),
                    Cell::from(project.venue.name.clone()),
                ])
            })
            .collect();

        if rows.is_empty() {
            let message = if self.loading {
                "Loading projects…".to_string()
            } else if let Some(err) = self.error {
                format!("Could not load projects: {err}")
            } else {
                "No projects.".to_string()
            };
            let [head, body] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(table_area);
            frame.render_widget(
                Table::new(Vec::<Row>::new(), column_widths()).header(header),
                head,
            );
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
                body,
            );
        } else {
            let highlight = if self.focused {
                Style::default().bg(Color::Indexed(254))
            } else {
                Style::default()
            };
            let table = Table::new(rows, column_widths())
                .header(header)
                .row_highlight_style(highlight);
            frame.render_stateful_widget(table, table_area, &mut self.state.table_state);
        }

        frame.render_widget(Paragraph::new(self.footer()), footer_area);
    }
}

fn column_widths() -> [Constraint; 5] {
    [
        Constraint::Fill(3),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(12),
        Constraint::Fill(2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_project;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn projects(n: u64) -> Vec<Project> {
        (1..=n)
            .map(|i| sample_project(i, &format!("Project {i:02}"), "2024-03-05"))
            .collect()
    }

    fn rendered(state: &mut ProjectTableState, projects: &[Project]) -> String {
        let backend = TestBackend::new(120, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                ProjectTable::new(state, projects, false, None, true).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_first_page_and_footer() {
        let list = projects(20);
        let mut state = ProjectTableState::new(9);
        state.reset(list.len());

        let text = rendered(&mut state, &list);
        assert!(text.contains("Project 01"));
        assert!(text.contains("Project 09"));
        assert!(!text.contains("Project 10"));
        assert!(text.contains("05 March 2024"));
        assert!(text.contains("of 20 entries"));
    }

    #[test]
    fn test_paging_moves_window() {
        let list = projects(20);
        let mut state = ProjectTableState::new(9);
        state.reset(list.len());

        state.handle_event(&TuiEvent::Right);
        state.handle_event(&TuiEvent::Right);
        assert_eq!(state.pagination.page(), 2);
        let text = rendered(&mut state, &list);
        assert!(text.contains("Project 19"));
        assert!(text.contains("Project 20"));
        assert!(!text.contains("Project 18"));

        state.handle_event(&TuiEvent::InputChar('1'));
        assert_eq!(state.pagination.page(), 0);
        state.handle_event(&TuiEvent::InputChar('9'));
        assert_eq!(state.pagination.page(), 0);
    }

    #[test]
    fn test_open_selected_row() {
        let list = projects(12);
        let mut state = ProjectTableState::new(9);
        state.reset(list.len());

        state.handle_event(&TuiEvent::Right);
        state.handle_event(&TuiEvent::Down);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(TableEvent::Open(10))
        );

        // Selection is clamped to the rows on the page.
        for _ in 0..10 {
            state.handle_event(&TuiEvent::Down);
        }
        assert_eq!(state.selected_index(), Some(11));
    }

    #[test]
    fn test_empty_table_has_no_selection() {
        let mut state = ProjectTableState::new(9);
        state.reset(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::Down), None);
        let text = rendered(&mut state, &[]);
        assert!(text.contains("No projects."));
    }
}
