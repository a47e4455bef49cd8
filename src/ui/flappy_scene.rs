//! UI rendering for the Flappy Bird game screen.
//!
//! The logical playfield is sampled at the centre of every terminal cell of
//! an aspect-fitted viewport, then the HUD text is drawn on top.

use crate::constants::*;
use crate::game::{Bird, GamePhase, Session};
use crate::ui::game_common::{create_game_layout, draw_centered_text, render_status_bar};
use crate::ui::responsive::{fits, render_too_small};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

const SKY: Color = Color::Rgb(135, 206, 235);
const PIPE_GREEN: Color = Color::Rgb(0, 200, 0);
const SAND: Color = Color::Rgb(222, 184, 135);
const BIRD_YELLOW: Color = Color::Rgb(255, 255, 0);

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

const SCORE_Y: f64 = 50.0;
const GAME_OVER_Y: f64 = SCREEN_HEIGHT / 2.0 - 50.0;
const RESTART_HINT_Y: f64 = SCREEN_HEIGHT / 2.0 + 10.0;

const EYE_RADIUS: f64 = 3.0;

const CONTROLS_PLAYING: &[(&str, &str)] = &[("[Space]", "Flap"), ("[Esc]", "Quit")];
const CONTROLS_GAME_OVER: &[(&str, &str)] = &[("[Space]", "Restart"), ("[Esc]", "Quit")];

/// What is visible at a playfield point. Later layers cover earlier ones:
/// sky, pipes, bird, ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Sky,
    Pipe,
    PipeCap,
    Bird,
    BirdEye,
    Ground,
}

impl Tile {
    fn style(self) -> Style {
        match self {
            Tile::Sky => Style::default().bg(SKY),
            Tile::Pipe => Style::default().bg(PIPE_GREEN),
            Tile::PipeCap | Tile::Ground => Style::default().bg(SAND),
            Tile::Bird => Style::default().bg(BIRD_YELLOW),
            Tile::BirdEye => Style::default().fg(Color::Black).bg(BIRD_YELLOW),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Tile::BirdEye => "•",
            _ => " ",
        }
    }
}

/// Classify the playfield point `(x, y)`.
pub fn tile_at(session: &Session, x: f64, y: f64) -> Tile {
    if y >= GROUND_TOP {
        return Tile::Ground;
    }

    let bird = &session.bird;
    if in_bird(bird, x, y) {
        let (ex, ey) = eye_center(bird);
        let (dx, dy) = (x - ex, y - ey);
        if dx * dx + dy * dy <= EYE_RADIUS * EYE_RADIUS {
            return Tile::BirdEye;
        }
        return Tile::Bird;
    }

    for pipe in &session.pipes {
        let (top_cap, bottom_cap) = pipe.cap_rects();
        if top_cap.contains(x, y) || bottom_cap.contains(x, y) {
            return Tile::PipeCap;
        }
        if pipe.top_rect().contains(x, y) || pipe.bottom_rect().contains(x, y) {
            return Tile::Pipe;
        }
    }

    Tile::Sky
}

/// The bird is an ellipse inscribed in its bounding box.
fn in_bird(bird: &Bird, x: f64, y: f64) -> bool {
    let nx = (x - bird.x) / (BIRD_WIDTH / 2.0);
    let ny = (y - bird.y) / (BIRD_HEIGHT / 2.0);
    nx * nx + ny * ny <= 1.0
}

fn eye_center(bird: &Bird) -> (f64, f64) {
    let rect = bird.rect();
    (rect.x + BIRD_WIDTH * 0.8, rect.y + BIRD_HEIGHT * 0.3)
}

/// A block of terminal cells showing the whole logical playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    /// Largest block inside `bounds` with the playfield's aspect ratio,
    /// centred horizontally and vertically.
    pub fn fit(bounds: Rect) -> Self {
        if bounds.width == 0 || bounds.height == 0 {
            return Self {
                area: Rect::new(bounds.x, bounds.y, 0, 0),
            };
        }

        let cols_per_row = SCREEN_WIDTH / SCREEN_HEIGHT * CELL_ASPECT;
        let mut height = bounds.height;
        let mut width = (height as f64 * cols_per_row).round().max(1.0) as u16;
        if width > bounds.width {
            width = bounds.width;
            height = ((width as f64 / cols_per_row).round() as u16).clamp(1, bounds.height);
        }

        let x = bounds.x + (bounds.width - width) / 2;
        let y = bounds.y + (bounds.height - height) / 2;
        Self {
            area: Rect::new(x, y, width, height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.area.width == 0 || self.area.height == 0
    }

    /// Playfield point at the centre of the cell at (`col`, `row`),
    /// relative to the viewport.
    pub fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        let x = (col as f64 + 0.5) * SCREEN_WIDTH / self.area.width as f64;
        let y = (row as f64 + 0.5) * SCREEN_HEIGHT / self.area.height as f64;
        (x, y)
    }

    /// Absolute buffer cell containing the playfield point, if it is on screen.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if self.is_empty() || !(0.0..SCREEN_WIDTH).contains(&x) || !(0.0..SCREEN_HEIGHT).contains(&y)
        {
            return None;
        }
        let col = ((x / SCREEN_WIDTH * self.area.width as f64) as u16).min(self.area.width - 1);
        let row = ((y / SCREEN_HEIGHT * self.area.height as f64) as u16).min(self.area.height - 1);
        Some((self.area.x + col, self.area.y + row))
    }

    /// Absolute buffer row for a playfield height.
    fn row_for(&self, y: f64) -> Option<u16> {
        self.to_cell(SCREEN_WIDTH / 2.0, y).map(|(_, row)| row)
    }
}

/// Render the Flappy Bird game screen into `area`.
pub fn render_game(frame: &mut Frame, area: Rect, session: &Session) {
    if !fits(area.width, area.height) {
        render_too_small(frame, area);
        return;
    }

    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan);
    let viewport = Viewport::fit(layout.content);
    if !viewport.is_empty() {
        render_playfield(frame.buffer_mut(), &viewport, session);
        render_hud(frame.buffer_mut(), &viewport, session);
    }
    render_status_bar_content(frame, layout.status_bar, session);
}

fn render_playfield(buf: &mut Buffer, viewport: &Viewport, session: &Session) {
    let area = viewport.area;
    for row in 0..area.height {
        for col in 0..area.width {
            let (x, y) = viewport.cell_center(col, row);
            paint(buf, area.x + col, area.y + row, tile_at(session, x, y));
        }
    }

    // Small viewports can fall between the bird's sample points
    let bird = &session.bird;
    if bird.y < GROUND_TOP {
        if let Some((cx, cy)) = viewport.to_cell(bird.x, bird.y) {
            paint(buf, cx, cy, Tile::Bird);
        }
        let (ex, ey) = eye_center(bird);
        if ey < GROUND_TOP {
            if let Some((cx, cy)) = viewport.to_cell(ex, ey) {
                paint(buf, cx, cy, Tile::BirdEye);
            }
        }
    }
}

fn paint(buf: &mut Buffer, x: u16, y: u16, tile: Tile) {
    buf.get_mut(x, y)
        .set_symbol(tile.symbol())
        .set_style(tile.style());
}

fn render_hud(buf: &mut Buffer, viewport: &Viewport, session: &Session) {
    if let Some(row) = viewport.row_for(SCORE_Y) {
        draw_centered_text(
            buf,
            viewport.area,
            row,
            &session.score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    }

    if session.phase == GamePhase::GameOver {
        if let Some(row) = viewport.row_for(GAME_OVER_Y) {
            draw_centered_text(
                buf,
                viewport.area,
                row,
                "Game Over",
                Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );
        }
        if let Some(row) = viewport.row_for(RESTART_HINT_Y) {
            draw_centered_text(
                buf,
                viewport.area,
                row,
                "Press SPACE to restart",
                Style::default().fg(Color::Black),
            );
        }
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &Session) {
    match session.phase {
        GamePhase::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score),
            Color::Green,
            CONTROLS_PLAYING,
        ),
        GamePhase::GameOver => {
            let cause = session.crash.map(|c| c.describe()).unwrap_or("crashed");
            render_status_bar(
                frame,
                area,
                &format!("You {} with {} points", cause, session.score),
                Color::Red,
                CONTROLS_GAME_OVER,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Crash, Pipe};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_session() -> Session {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut session = Session::new(&mut rng);
        session.pipes = vec![Pipe::with_height(200.0, 100.0)];
        session
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_tile_layers() {
        let session = test_session();
        assert_eq!(tile_at(&session, 200.0, 550.0), Tile::Ground);
        assert_eq!(tile_at(&session, 120.0, 100.0), Tile::Sky);
        assert_eq!(tile_at(&session, 220.0, 50.0), Tile::Pipe);
        assert_eq!(tile_at(&session, 220.0, 95.0), Tile::PipeCap);
        assert_eq!(tile_at(&session, 220.0, 150.0), Tile::Sky); // inside the gap
        assert_eq!(tile_at(&session, 220.0, 255.0), Tile::PipeCap);
        assert_eq!(tile_at(&session, 220.0, 400.0), Tile::Pipe);
    }

    #[test]
    fn test_tile_bird_and_eye() {
        let session = test_session();
        assert_eq!(tile_at(&session, 50.0, 300.0), Tile::Bird);
        let (ex, ey) = eye_center(&session.bird);
        assert_eq!(tile_at(&session, ex, ey), Tile::BirdEye);
        // Bounding-box corner lies outside the ellipse
        assert_eq!(tile_at(&session, 34.0, 289.0), Tile::Sky);
    }

    #[test]
    fn test_ground_covers_bird() {
        let mut session = test_session();
        session.bird.y = GROUND_TOP;
        assert_eq!(tile_at(&session, 50.0, GROUND_TOP + 5.0), Tile::Ground);
    }

    #[test]
    fn test_viewport_fit_by_height() {
        let viewport = Viewport::fit(Rect::new(0, 0, 100, 30));
        assert_eq!(viewport.area, Rect::new(30, 0, 40, 30));
    }

    #[test]
    fn test_viewport_fit_by_width() {
        let viewport = Viewport::fit(Rect::new(2, 3, 20, 30));
        assert_eq!(viewport.area.width, 20);
        assert_eq!(viewport.area.height, 15);
        assert_eq!(viewport.area.y, 3 + 7);
    }

    #[test]
    fn test_viewport_empty_bounds() {
        assert!(Viewport::fit(Rect::new(0, 0, 0, 10)).is_empty());
    }

    #[test]
    fn test_to_cell_corners() {
        let viewport = Viewport::fit(Rect::new(0, 0, 40, 30));
        assert_eq!(viewport.to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(viewport.to_cell(399.9, 599.9), Some((39, 29)));
        assert_eq!(viewport.to_cell(-1.0, 10.0), None);
        assert_eq!(viewport.to_cell(10.0, 600.0), None);
    }

    #[test]
    fn test_ground_occupies_bottom_rows() {
        let viewport = Viewport::fit(Rect::new(0, 0, 40, 30));
        let session = test_session();
        // Bottom sixth of the playfield is ground
        for row in 25..30 {
            let (x, y) = viewport.cell_center(0, row);
            assert_eq!(tile_at(&session, x, y), Tile::Ground);
        }
        let (x, y) = viewport.cell_center(0, 24);
        assert_ne!(tile_at(&session, x, y), Tile::Ground);
    }

    #[test]
    fn test_render_playing_screen() {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        let mut session = test_session();
        session.score = 12;
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game(frame, area, &session);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Flappy Bird"));
        assert!(text.contains("12"));
        assert!(text.contains("Score: 12"));
        assert!(!text.contains("Game Over"));
    }

    #[test]
    fn test_render_game_over_screen() {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        let mut session = test_session();
        session.end(Crash::Ground);
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game(frame, area, &session);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Press SPACE to restart"));
        assert!(text.contains("hit the ground"));
    }

    #[test]
    fn test_render_too_small() {
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        let session = test_session();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game(frame, area, &session);
            })
            .unwrap();

        assert!(screen_text(&terminal).contains("Terminal too small"));
    }

    #[test]
    fn test_render_bird_visible_in_tiny_viewport() {
        let mut terminal = Terminal::new(TestBackend::new(24, 14)).unwrap();
        let session = test_session();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game(frame, area, &session);
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let has_bird = buf.content().iter().any(|cell| cell.bg == BIRD_YELLOW);
        assert!(has_bird);
    }
}
