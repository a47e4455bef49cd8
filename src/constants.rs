// Playfield (logical units, y grows downward)
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 100.0;
pub const GROUND_TOP: f64 = SCREEN_HEIGHT - GROUND_HEIGHT;

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_START_Y: f64 = SCREEN_HEIGHT / 2.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const GRAVITY: f64 = 0.25;
pub const FLAP_STRENGTH: f64 = -6.5;

// Pipes
pub const PIPE_WIDTH: f64 = 52.0;
pub const PIPE_GAP: f64 = 150.0;
/// Minimum distance between a gap and the screen top or the ground.
pub const PIPE_MARGIN: f64 = 50.0;
pub const PIPE_MIN_HEIGHT: u32 = PIPE_MARGIN as u32;
pub const PIPE_MAX_HEIGHT: u32 = (GROUND_TOP - PIPE_GAP - PIPE_MARGIN) as u32;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_SPAWN_GAP: f64 = 200.0;
pub const PIPE_CAP_HEIGHT: f64 = 10.0;
pub const FIRST_PIPE_X: f64 = SCREEN_WIDTH + 100.0;

// Timing
pub const FPS: u64 = 60;
pub const TICK_INTERVAL_MICROS: u64 = 1_000_000 / FPS;

// Sizing invariants
const _: () = assert!(PIPE_MIN_HEIGHT <= PIPE_MAX_HEIGHT, "pipe gap does not fit above the ground");
const _: () = assert!(BIRD_HEIGHT < PIPE_GAP, "bird cannot fit through the gap");
const _: () = assert!(PIPE_SPAWN_GAP < SCREEN_WIDTH, "spawn threshold is off-screen");
const _: () = assert!(FPS > 0);
