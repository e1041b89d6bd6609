//! Screen flow: main menu, difficulty picker, high-score view and the game.
//!
//! Holds everything the UI renders and turns `AppInput`s into state changes.
//! Nothing here touches the terminal, so the whole flow is testable.

use crate::config::GameConfig;
use crate::game::{apply_move, Difficulty, Direction, GameOutcome, GridGame, MoveEvent};
use crate::high_scores::{HighScoreTable, HighScores, RecordOutcome};
use crate::input::AppInput;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    DifficultySelect,
    HighScores,
    Playing,
}

/// Main menu entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartGame,
    SetDifficulty,
    HighScores,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::StartGame,
        MenuItem::SetDifficulty,
        MenuItem::HighScores,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::SetDifficulty => "Set Difficulty",
            Self::HighScores => "View High Scores",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Victory,
    Defeat,
    Error,
}

/// A modal message. Any key dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub lines: Vec<String>,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, lines: Vec<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            lines,
        }
    }
}

pub struct App {
    pub config: GameConfig,
    /// Difficulty for the next session.
    pub difficulty: Difficulty,
    pub screen: Screen,
    pub menu_index: usize,
    pub difficulty_index: usize,
    pub game: Option<GridGame>,
    pub high_scores: HighScoreTable,
    /// Snapshot shown on the high-score screen.
    pub shown_scores: HighScores,
    pub notice: Option<Notice>,
    /// One-line feedback under the board (enemy hits).
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let high_scores = config.high_score_table();
        Self {
            difficulty: config.difficulty,
            difficulty_index: config.difficulty.index(),
            config,
            screen: Screen::MainMenu,
            menu_index: 0,
            game: None,
            high_scores,
            shown_scores: HighScores::default(),
            notice: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index.min(MenuItem::ALL.len() - 1)]
    }

    pub fn handle_input(&mut self, input: AppInput) {
        let mut rng = rand::thread_rng();
        self.handle_input_with_rng(input, &mut rng);
    }

    pub fn handle_input_with_rng<R: Rng>(&mut self, input: AppInput, rng: &mut R) {
        if input == AppInput::Interrupt {
            self.should_quit = true;
            return;
        }

        if self.notice.take().is_some() {
            // A finished game stays on screen until its notice is dismissed.
            if self.game.as_ref().is_some_and(GridGame::is_terminal) {
                self.return_to_menu();
            }
            return;
        }

        match self.screen {
            Screen::MainMenu => self.handle_main_menu(input, rng),
            Screen::DifficultySelect => self.handle_difficulty_select(input),
            Screen::HighScores => self.handle_high_scores(input),
            Screen::Playing => self.handle_playing(input),
        }
    }

    fn handle_main_menu<R: Rng>(&mut self, input: AppInput, rng: &mut R) {
        match input {
            AppInput::Up => self.menu_index = self.menu_index.saturating_sub(1),
            AppInput::Down => {
                if self.menu_index + 1 < MenuItem::ALL.len() {
                    self.menu_index += 1;
                }
            }
            AppInput::Select => match self.selected_menu_item() {
                MenuItem::StartGame => self.start_game(rng),
                MenuItem::SetDifficulty => {
                    self.difficulty_index = self.difficulty.index();
                    self.screen = Screen::DifficultySelect;
                }
                MenuItem::HighScores => {
                    self.shown_scores = self.high_scores.load();
                    self.screen = Screen::HighScores;
                }
                MenuItem::Quit => self.should_quit = true,
            },
            AppInput::Quit => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_difficulty_select(&mut self, input: AppInput) {
        match input {
            AppInput::Up => self.difficulty_index = self.difficulty_index.saturating_sub(1),
            AppInput::Down => {
                if self.difficulty_index + 1 < Difficulty::ALL.len() {
                    self.difficulty_index += 1;
                }
            }
            AppInput::Select => {
                self.difficulty = Difficulty::from_index(self.difficulty_index);
                log::info!("difficulty set to {}", self.difficulty);
                self.notice = Some(Notice::new(
                    NoticeKind::Info,
                    "Difficulty Set",
                    vec![format!("Difficulty changed to {}", self.difficulty)],
                ));
                self.screen = Screen::MainMenu;
            }
            AppInput::Back => self.screen = Screen::MainMenu,
            _ => {}
        }
    }

    fn handle_high_scores(&mut self, input: AppInput) {
        if matches!(input, AppInput::Select | AppInput::Back) {
            self.screen = Screen::MainMenu;
        }
    }

    fn handle_playing(&mut self, input: AppInput) {
        let direction = match input {
            AppInput::Up => Direction::Up,
            AppInput::Down => Direction::Down,
            AppInput::Left => Direction::Left,
            AppInput::Right => Direction::Right,
            AppInput::Back => {
                if let Some(game) = &self.game {
                    log::info!(
                        "session abandoned after {} moves with {} health",
                        game.moves,
                        game.health
                    );
                }
                self.return_to_menu();
                return;
            }
            _ => return,
        };

        let Some(game) = self.game.as_mut() else {
            self.return_to_menu();
            return;
        };

        self.status = None;
        for event in apply_move(game, direction) {
            match event {
                MoveEvent::Moved { .. } => {}
                MoveEvent::Hit { penalty } => {
                    self.status = Some(format!("You hit an enemy! -{} health", penalty));
                }
                MoveEvent::Victory { .. } | MoveEvent::Defeat => {}
            }
        }

        if game.is_terminal() {
            self.finish_session();
        }
    }

    /// Begin a session at the current difficulty. Setup failures are shown
    /// as a notice and the menu stays up.
    pub fn start_game<R: Rng>(&mut self, rng: &mut R) {
        match GridGame::new(self.config.size, self.difficulty, rng) {
            Ok(game) => {
                let game = game.with_enemy_hit_penalty(self.config.enemy_hit_penalty);
                log::info!(
                    "session started: {} on {}x{}, player {} goal {}",
                    self.difficulty,
                    game.size,
                    game.size,
                    game.player,
                    game.goal
                );
                self.game = Some(game);
                self.status = None;
                self.screen = Screen::Playing;
            }
            Err(e) => {
                log::warn!("could not start session: {}", e);
                self.notice = Some(Notice::new(
                    NoticeKind::Error,
                    "Cannot Start Game",
                    vec![e.to_string()],
                ));
            }
        }
    }

    fn finish_session(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };

        match game.outcome {
            Some(GameOutcome::Victory) => {
                log::info!("victory on {} with score {}", game.difficulty, game.score);
                let mut lines = vec![
                    "You reached the goal!".to_string(),
                    format!("Final Score: {}", game.score),
                    String::new(),
                ];
                match self.high_scores.record_if_better(game.difficulty, game.score) {
                    Ok(RecordOutcome::NewRecord { .. }) => lines.push(format!(
                        "New high score for {}: {}",
                        game.difficulty, game.score
                    )),
                    Ok(RecordOutcome::NotImproved { best }) => {
                        lines.push(format!("Your score: {}", game.score));
                        lines.push(format!("Current high score: {}", best));
                    }
                    Err(e) => {
                        log::warn!("could not save high score: {}", e);
                        lines.push(format!("Could not save high score: {}", e));
                    }
                }
                self.notice = Some(Notice::new(NoticeKind::Victory, "Victory!", lines));
            }
            Some(GameOutcome::Defeat) => {
                log::info!("defeat on {} after {} moves", game.difficulty, game.moves);
                self.notice = Some(Notice::new(
                    NoticeKind::Defeat,
                    "Game Over",
                    vec!["You ran out of health!".to_string()],
                ));
            }
            None => {}
        }
    }

    fn return_to_menu(&mut self) {
        self.game = None;
        self.status = None;
        self.screen = Screen::MainMenu;
    }
}
