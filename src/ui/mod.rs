pub mod game_common;
pub mod grid_scene;
pub mod menu_scene;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Draw the current screen, then any pending notice on top.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();

    match app.screen {
        Screen::MainMenu => menu_scene::render_main_menu(frame, area, app),
        Screen::DifficultySelect => menu_scene::render_difficulty_select(frame, area, app),
        Screen::HighScores => menu_scene::render_high_scores(frame, area, &app.shown_scores),
        Screen::Playing => match &app.game {
            Some(game) => {
                grid_scene::render_grid_scene(frame, area, game, app.status.as_deref())
            }
            None => menu_scene::render_main_menu(frame, area, app),
        },
    }

    if let Some(notice) = &app.notice {
        game_common::render_notice(frame, area, notice);
    }
}
