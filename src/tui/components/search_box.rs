//! # SearchBox Component
//!
//! Single-line search field in the header.
//!
//! ## State Management
//!
//! The query buffer is internal state. `placeholder` and `focused` are props
//! synced from the core `Header` every frame: the placeholder is whatever the
//! prompt animation has typed so far, and is already empty while focused.
//!
//! Focus itself is owned by the parent, which forwards focus changes to
//! `Header::focus_search` / `Header::blur_search` so the animation pauses.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Width of the search box including borders.
pub const SEARCH_WIDTH: u16 = 36;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// User pressed Enter on a non-empty query
    Submit(String),
    /// Query text changed
    ContentChanged,
}

pub struct SearchBox {
    /// Typed query (Internal State)
    pub query: String,
    /// Animated prompt text (Prop)
    pub placeholder: String,
    /// Whether the box holds input focus (Prop)
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            placeholder: String::new(),
            focused: false,
        }
    }

    /// What the box shows: the query if there is one, else the placeholder.
    fn display_text(&self) -> (String, Style) {
        if !self.query.is_empty() {
            (self.query.clone(), Style::default().fg(Color::White))
        } else {
            (
                self.placeholder.clone(),
                Style::default()
                    .fg(Color::Indexed(103))
                    .add_modifier(Modifier::DIM),
            )
        }
    }

    /// Keeps the tail of `text` visible when it is wider than `width` cells.
    fn visible_tail(text: &str, width: usize) -> &str {
        let mut start = 0;
        while text[start..].width() > width {
            match text[start..].chars().next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        &text[start..]
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Indexed(103))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        // "⌕ " before the text
        let inner_width = area.width.saturating_sub(2 + 2) as usize;
        let (text, style) = self.display_text();
        let visible = Self::visible_tail(&text, inner_width).to_string();
        let visible_width = visible.width() as u16;

        let line = ratatui::text::Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(Color::Gray)),
            Span::styled(visible, style),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused {
            let typed_width = if self.query.is_empty() { 0 } else { visible_width };
            let x = area.x + 1 + 2 + typed_width;
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.query.pop().map(|_| SearchEvent::ContentChanged),
            TuiEvent::Submit => {
                let query = self.query.trim();
                if query.is_empty() {
                    None
                } else {
                    Some(SearchEvent::Submit(query.to_string()))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(search: &mut SearchBox) -> String {
        let backend = TestBackend::new(SEARCH_WIDTH, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                search.render(f, f.area());
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
    fn test_typing_and_backspace() {
        let mut search = SearchBox::new();
        assert_eq!(
            search.handle_event(&TuiEvent::InputChar('p')),
            Some(SearchEvent::ContentChanged)
        );
        search.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(search.query, "pi");
        search.handle_event(&TuiEvent::Backspace);
        assert_eq!(search.query, "p");
        search.handle_event(&TuiEvent::Backspace);
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit_ignores_blank_query() {
        let mut search = SearchBox::new();
        search.query = "  ".to_string();
        assert_eq!(search.handle_event(&TuiEvent::Submit), None);

        search.query = " pier 4 ".to_string();
        assert_eq!(
            search.handle_event(&TuiEvent::Submit),
            Some(SearchEvent::Submit("pier 4".to_string()))
        );
    }

    #[test]
    fn test_renders_placeholder_when_empty() {
        let mut search = SearchBox::new();
        search.placeholder = "Search by loc".to_string();
        assert!(rendered(&mut search).contains("Search by loc"));
    }

    #[test]
    fn test_query_replaces_placeholder() {
        let mut search = SearchBox::new();
        search.placeholder = "Search by user".to_string();
        search.query = "harbour".to_string();
        search.focused = true;
        let text = rendered(&mut search);
        assert!(text.contains("harbour"));
        assert!(!text.contains("Search by"));
    }

    #[test]
    fn test_long_query_keeps_tail_visible() {
        assert_eq!(SearchBox::visible_tail("abcdef", 3), "def");
        assert_eq!(SearchBox::visible_tail("abc", 10), "abc");
    }
}
