//! Flappy Bird data structures.
//!
//! All coordinates are logical playfield units: origin at the top-left,
//! y grows downward, the ground starts at `GROUND_TOP`.

use crate::constants::*;
use rand::Rng;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `(cx, cy)`.
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap: rectangles that only share an edge do not intersect,
    /// and empty rectangles intersect nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// The player's bird. Horizontal position never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Vertical centre.
    pub y: f64,
    /// Vertical velocity per tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    /// A bird at mid-screen height, at rest.
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }

    /// Replace the current velocity with the upward impulse.
    pub fn flap(&mut self) {
        self.velocity = FLAP_STRENGTH;
    }

    /// Apply one tick of gravity. Position is not clamped.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Bounding box centred on the bird.
    pub fn rect(&self) -> Rect {
        Rect::centered(self.x, self.y, BIRD_WIDTH, BIRD_HEIGHT)
    }

    pub fn top(&self) -> f64 {
        self.y - BIRD_HEIGHT / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + BIRD_HEIGHT / 2.0
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair: a segment hanging from the top and one standing on the
/// ground, separated by a `PIPE_GAP` opening.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Height of the top segment, i.e. where the gap starts.
    pub height: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub scored: bool,
}

impl Pipe {
    /// Pipe at `x` with a random gap position that keeps `PIPE_MARGIN`
    /// clear above and below the gap.
    pub fn new<R: Rng>(x: f64, rng: &mut R) -> Self {
        let height = rng.gen_range(PIPE_MIN_HEIGHT..=PIPE_MAX_HEIGHT);
        Self::with_height(x, height as f64)
    }

    pub fn with_height(x: f64, height: f64) -> Self {
        Self {
            x,
            height,
            scored: false,
        }
    }

    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    pub fn right(&self) -> f64 {
        self.x + PIPE_WIDTH
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, PIPE_WIDTH, self.height)
    }

    pub fn bottom_rect(&self) -> Rect {
        let top = self.height + PIPE_GAP;
        Rect::new(self.x, top, PIPE_WIDTH, GROUND_TOP - top)
    }

    /// The lip at the open end of each segment: `(top, bottom)`.
    pub fn cap_rects(&self) -> (Rect, Rect) {
        let top = self.top_rect();
        let bottom = self.bottom_rect();
        (
            Rect::new(self.x, top.bottom() - PIPE_CAP_HEIGHT, PIPE_WIDTH, PIPE_CAP_HEIGHT),
            Rect::new(self.x, bottom.top(), PIPE_WIDTH, PIPE_CAP_HEIGHT),
        )
    }

    pub fn collide(&self, bird_rect: &Rect) -> bool {
        self.top_rect().intersects(bird_rect) || self.bottom_rect().intersects(bird_rect)
    }

    pub fn off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Pipe,
    Ground,
    Ceiling,
}

impl Crash {
    pub fn describe(self) -> &'static str {
        match self {
            Crash::Pipe => "hit a pipe",
            Crash::Ground => "hit the ground",
            Crash::Ceiling => "flew off the top",
        }
    }
}

/// Everything that changes during play.
#[derive(Debug, Clone)]
pub struct Session {
    pub bird: Bird,
    /// Left-to-right; new pipes are appended at the back.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub phase: GamePhase,
    /// Set when the phase becomes `GameOver`.
    pub crash: Option<Crash>,
    /// Ticks simulated since the last reset.
    pub tick_count: u64,
}

impl Session {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            bird: Bird::new(),
            pipes: vec![Pipe::new(FIRST_PIPE_X, rng)],
            score: 0,
            phase: GamePhase::Playing,
            crash: None,
            tick_count: 0,
        }
    }

    /// Back to the opening state: fresh bird, one pipe beyond the right edge,
    /// zero score, playing.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Enter `GameOver`, keeping the first recorded cause.
    pub fn end(&mut self, crash: Crash) {
        self.phase = GamePhase::GameOver;
        if self.crash.is_none() {
            self.crash = Some(crash);
        }
    }
}
