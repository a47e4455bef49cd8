//! Shared UI pieces for the game screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Playfield area, inside the outer border.
    pub content: Rect,
    /// Status bar area (2 lines) at the bottom, inside the outer border.
    pub status_bar: Rect,
}

/// Clear `area`, draw the titled outer border and split the inside into a
/// content area and a 2-line status bar.
///
/// ```text
/// ┌─ Title ────────────────┐
/// │                        │
/// │   [content area]       │
/// │                        │
/// │ [status bar - 2 lines] │
/// └────────────────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Render a status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g.
/// `[("[Space]", "Flap"), ("[Esc]", "Quit")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Write `text` horizontally centred on row `y` of `area`, truncated to fit.
///
/// Only the foreground and modifiers in `style` are applied on top of what
/// is already drawn, so the scene stays visible behind the text.
pub fn draw_centered_text(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    if area.width == 0 || y < area.y || y >= area.y + area.height {
        return;
    }
    let len = text.chars().count().min(area.width as usize) as u16;
    let x = area.x + (area.width - len) / 2;
    buf.set_stringn(x, y, text, len as usize, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_centered_text() {
        let area = Rect::new(0, 0, 11, 3);
        let mut buf = Buffer::empty(area);
        draw_centered_text(&mut buf, area, 1, "abc", Style::default());
        assert_eq!(row_text(&buf, 1), "    abc    ");
    }

    #[test]
    fn test_centered_text_truncates() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        draw_centered_text(&mut buf, area, 0, "Game Over", Style::default());
        assert_eq!(row_text(&buf, 0), "Game");
    }

    #[test]
    fn test_centered_text_outside_rows_ignored() {
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        draw_centered_text(&mut buf, area, 5, "x", Style::default());
        assert_eq!(row_text(&buf, 0), "        ");
        assert_eq!(row_text(&buf, 1), "        ");
    }
}
