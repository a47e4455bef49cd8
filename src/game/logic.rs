//! Per-tick game logic: physics, pipe scrolling, collision and scoring.

use super::types::{Bird, Crash, GamePhase, Pipe, Session};
use crate::constants::*;
use rand::Rng;

/// Input sampled for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Action key (flap while playing, restart after a crash).
    pub action: bool,
    /// Quit requested. The loop handles this before calling [`tick`].
    pub quit: bool,
}

/// What happened during one tick. Used for logging by the game loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub flapped: bool,
    pub restarted: bool,
    /// Pipes scored this tick.
    pub scored: u32,
    /// Set on the tick the run ends.
    pub crash: Option<Crash>,
}

/// Advance the session by one fixed tick.
///
/// While playing: flap, gravity, scroll and collide pipes, cull, spawn,
/// score, then check the playfield bounds. After a crash the session is
/// frozen until the action key restarts it.
pub fn tick<R: Rng>(session: &mut Session, input: &TickInput, rng: &mut R) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if session.phase == GamePhase::GameOver {
        if input.action {
            session.reset(rng);
            outcome.restarted = true;
        }
        return outcome;
    }

    if input.action {
        session.bird.flap();
        outcome.flapped = true;
    }

    session.bird.update();
    session.tick_count += 1;

    // Every pipe scrolls even after a hit on this tick
    let bird_rect = session.bird.rect();
    let mut hit_pipe = false;
    for pipe in &mut session.pipes {
        pipe.update();
        if pipe.collide(&bird_rect) {
            hit_pipe = true;
        }
    }
    if hit_pipe {
        session.end(Crash::Pipe);
    }

    cull_front(&mut session.pipes);
    spawn_if_needed(&mut session.pipes, rng);
    outcome.scored = score_passed_pipes(session);

    if let Some(crash) = check_bounds(&session.bird) {
        session.end(crash);
    }

    if session.phase == GamePhase::GameOver {
        outcome.crash = session.crash;
    }

    outcome
}

/// Drop the front pipe once it has scrolled fully past the left edge.
/// At most one pipe leaves per tick.
fn cull_front(pipes: &mut Vec<Pipe>) {
    if pipes.first().is_some_and(Pipe::off_screen) {
        pipes.remove(0);
    }
}

/// Append a pipe at the right edge once the newest one has scrolled past
/// the spawn threshold. Returns true if a pipe was added.
fn spawn_if_needed<R: Rng>(pipes: &mut Vec<Pipe>, rng: &mut R) -> bool {
    let due = match pipes.last() {
        Some(last) => last.x < SCREEN_WIDTH - PIPE_SPAWN_GAP,
        None => true,
    };
    if due {
        pipes.push(Pipe::new(SCREEN_WIDTH, rng));
    }
    due
}

/// Score every pipe whose right edge is now behind the bird, once each.
fn score_passed_pipes(session: &mut Session) -> u32 {
    let bird_x = session.bird.x;
    let mut scored = 0;
    for pipe in &mut session.pipes {
        if !pipe.scored && pipe.right() < bird_x {
            pipe.scored = true;
            scored += 1;
        }
    }
    session.score += scored;
    scored
}

fn check_bounds(bird: &Bird) -> Option<Crash> {
    if bird.bottom() > GROUND_TOP {
        Some(Crash::Ground)
    } else if bird.top() < 0.0 {
        Some(Crash::Ceiling)
    } else {
        None
    }
}
