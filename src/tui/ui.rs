use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::header_bar::HeaderBar;
use crate::tui::components::project_table::ProjectTable;
use crate::tui::components::search_box::SEARCH_WIDTH;
use crate::tui::components::sidebar::{SIDEBAR_WIDTH, Sidebar};
use crate::tui::{Pane, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

/// Rows taken by the header: the bordered search box is three tall.
const HEADER_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let [sidebar_area, main_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(frame.area());
    let [header_area, content_area, status_area] =
        Layout::vertical([Length(HEADER_HEIGHT), Min(0), Length(1)]).areas(main_area);

    Sidebar::new(
        &mut tui.sidebar,
        app.current_path(),
        tui.focus == Pane::Sidebar,
    )
    .render(frame, sidebar_area);

    draw_header(frame, header_area, app, tui);

    let content_area = content_area.inner(ratatui::layout::Margin::new(1, 1));
    if app.on_projects_page() {
        ProjectTable::new(
            &mut tui.table,
            &app.projects,
            app.loading_projects,
            app.projects_error.as_deref(),
            tui.focus == Pane::Page,
        )
        .render(frame, content_area);
    } else if app.on_detail_page() {
        draw_detail_page(frame, content_area, app);
    } else {
        draw_blank_page(frame, content_area, app.header.title());
    }

    draw_status_line(frame, status_area, app, tui);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let [title_area, search_area] =
        Layout::horizontal([Min(0), Length(SEARCH_WIDTH)]).areas(area);
    // Line the title up with the text row of the search box.
    let [_, title_area] = Layout::vertical([Length(1), Min(0)]).areas(title_area);
    let title_area = title_area.inner(ratatui::layout::Margin::new(1, 0));

    let show_tabs = app.on_detail_page();
    let title_height = HeaderBar::height(show_tabs).min(title_area.height);
    let title_area = Rect {
        height: title_height,
        ..title_area
    };
    HeaderBar::new(app.header.title().to_string(), show_tabs).render(frame, title_area);

    tui.search.placeholder = app.header.placeholder();
    tui.search.focused = tui.focus == Pane::Search;
    tui.search.render(frame, search_area);
}

fn draw_detail_page(frame: &mut Frame, area: Rect, app: &App) {
    let id = app
        .route
        .as_ref()
        .and_then(|r| r.detail_id(app.header.detail_parent()))
        .unwrap_or_default();
    let project = app.projects.iter().find(|p| p.matches_id(id));

    let lines = match project {
        Some(p) => vec![
            Line::from(vec![
                Span::styled("Status  ", Style::default().fg(Color::DarkGray)),
                Span::raw(p.status.clone()),
            ]),
            Line::from(vec![
                Span::styled("Venue   ", Style::default().fg(Color::DarkGray)),
                Span::raw(p.venue.name.clone()),
            ]),
            Line::from(vec![
                Span::styled("Dates   ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!(
                    "{} – {}",
                    crate::catalog::types::format_date(&p.start_date),
                    crate::catalog::types::format_date(&p.end_date)
                )),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            format!("Project #{id}"),
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_blank_page(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!("{title} has no content yet."),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status_line(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let hints = match tui.focus {
        Pane::Sidebar => "↑/↓ select · Enter open · Tab next pane · / search · Esc quit",
        Pane::Search => "Type to search · Esc leave search · Tab next pane",
        Pane::Page => "↑/↓ select · ←/→ page · Enter open · Tab next pane · Esc quit",
    };
    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if !app.status_message.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::raw(app.status_message.clone()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{sample_project, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_shows_title_and_placeholder() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/users".to_string()));
        for _ in 0..12 {
            update(&mut app, Action::AnimationTick);
        }
        let mut tui = TuiState::new(9);
        let text = screen(&app, &mut tui);
        assert!(text.contains("Users"));
        assert!(text.contains("Search by lo"));
    }

    #[test]
    fn test_focused_search_hides_placeholder() {
        let mut app = test_app();
        for _ in 0..12 {
            update(&mut app, Action::AnimationTick);
        }
        update(&mut app, Action::FocusSearch);
        let mut tui = TuiState::new(9);
        tui.focus = Pane::Search;
        let text = screen(&app, &mut tui);
        assert!(!text.contains("Search by"));
    }

    #[test]
    fn test_projects_page_renders_table() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/projects".to_string()));
        let generation = app.fetch_generation;
        update(
            &mut app,
            Action::ProjectsLoaded {
                generation,
                result: Ok(vec![sample_project(4, "Depot Refit", "2024-02-01")]),
            },
        );
        let mut tui = TuiState::new(9);
        tui.table.reset(app.projects.len());
        let text = screen(&app, &mut tui);
        assert!(text.contains("Depot Refit"));
        assert!(text.contains("of 1 entries"));
    }

    #[test]
    fn test_detail_page_shows_tabs() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/projects/4".to_string()));
        let mut tui = TuiState::new(9);
        let text = screen(&app, &mut tui);
        assert!(text.contains("Quotations"));
        assert!(text.contains("Project #4"));
    }
}
