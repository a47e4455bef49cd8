pub mod flappy_scene;
pub mod game_common;
pub mod responsive;

use crate::game::Session;
use ratatui::Frame;

/// Draw one frame of the game screen.
pub fn draw_ui(frame: &mut Frame, session: &Session) {
    let area = frame.size();
    flappy_scene::render_game(frame, area, session);
}
