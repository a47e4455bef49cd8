//! Terminal size checks.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Smallest terminal the game screen is drawn in.
pub const MIN_COLS: u16 = 24;
pub const MIN_ROWS: u16 = 14;

/// Whether a terminal of `cols` x `rows` can show the game screen.
pub fn fits(cols: u16, rows: u16) -> bool {
    cols >= MIN_COLS && rows >= MIN_ROWS
}

/// Render a "terminal too small" message in place of the game.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Need {}x{}, have {}x{}",
                MIN_COLS, MIN_ROWS, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "[Esc] Quit",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_at_minimum() {
        assert!(fits(MIN_COLS, MIN_ROWS));
        assert!(fits(200, 60));
    }

    #[test]
    fn test_too_small() {
        assert!(!fits(MIN_COLS - 1, MIN_ROWS));
        assert!(!fits(MIN_COLS, MIN_ROWS - 1));
        assert!(!fits(0, 0));
    }
}
