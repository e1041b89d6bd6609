//! Board rendering for a running session.
//!
//! Each cell is drawn three columns wide with a one-column gutter. The player
//! is red, the goal green and enemies sky blue on a light grey board.

use super::game_common::controls_line;
use crate::game::{GridGame, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PLAYER_BG: Color = Color::Red;
const GOAL_BG: Color = Color::Green;
const ENEMY_BG: Color = Color::Rgb(135, 206, 235);
const EMPTY_BG: Color = Color::Rgb(211, 211, 211);
const CELL_FG: Color = Color::Black;
const CELL_WIDTH: u16 = 3;
const INFO_WIDTH: u16 = 24;
const CONTROLS: [(&str, &str); 2] = [("[WASD/Arrows]", "Move"), ("[Esc/M]", "Menu")];

/// What occupies a cell, in drawing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Player,
    Goal,
    Enemy,
    Empty,
}

impl CellKind {
    pub fn at(game: &GridGame, pos: Position) -> Self {
        if pos == game.player {
            CellKind::Player
        } else if pos == game.goal {
            CellKind::Goal
        } else if game.is_enemy(pos) {
            CellKind::Enemy
        } else {
            CellKind::Empty
        }
    }

    fn glyph(self) -> char {
        match self {
            CellKind::Player => 'P',
            CellKind::Goal => 'G',
            CellKind::Enemy => 'E',
            CellKind::Empty => ' ',
        }
    }

    fn background(self) -> Color {
        match self {
            CellKind::Player => PLAYER_BG,
            CellKind::Goal => GOAL_BG,
            CellKind::Enemy => ENEMY_BG,
            CellKind::Empty => EMPTY_BG,
        }
    }
}

/// Screen regions inside the outer " Grid Game " border.
///
/// ```text
/// ┌─ Grid Game ───────────────────┬─ Info ───────────────┐
/// │            [board]            │ difficulty, health   │
/// │         [status line]         │ costs, legend        │
/// │         [controls]            │                      │
/// └───────────────────────────────┴──────────────────────┘
/// ```
struct SceneAreas {
    board: Rect,
    status: Rect,
    controls: Rect,
    info: Rect,
}

fn split_scene(frame: &mut Frame, area: Rect) -> SceneAreas {
    frame.render_widget(Clear, area);
    let outer = Block::default()
        .title(" Grid Game ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(INFO_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(columns[0]);

    SceneAreas {
        board: rows[0],
        status: rows[1],
        controls: rows[2],
        info: columns[1],
    }
}

/// Render the game screen. `status` replaces the hint under the board.
pub fn render_grid_scene(frame: &mut Frame, area: Rect, game: &GridGame, status: Option<&str>) {
    let areas = split_scene(frame, area);

    render_board(frame, areas.board, game);

    let (text, color) = match status {
        Some(msg) => (msg, Color::Yellow),
        None => ("Reach the goal (G), avoid enemies (E)", Color::Gray),
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        areas.status,
    );
    frame.render_widget(controls_line(&CONTROLS), areas.controls);

    render_info_panel(frame, areas.info, game);
}

fn render_board(frame: &mut Frame, area: Rect, game: &GridGame) {
    let board_w = game.size as u16 * (CELL_WIDTH + 1);
    // Blank spacer rows between board rows when there is room for them.
    let spaced = area.height >= game.size as u16 * 2;
    let board_h = if spaced {
        game.size as u16 * 2 - 1
    } else {
        game.size as u16
    };

    let mut lines: Vec<Line> = Vec::with_capacity(board_h as usize);
    for row in 0..game.size {
        if spaced && row > 0 {
            lines.push(Line::from(""));
        }
        let mut spans = Vec::with_capacity(game.size * 2);
        for col in 0..game.size {
            let kind = CellKind::at(game, Position::new(row, col));
            spans.push(Span::styled(
                format!(" {} ", kind.glyph()),
                Style::default()
                    .fg(CELL_FG)
                    .bg(kind.background())
                    .add_modifier(Modifier::BOLD),
            ));
            if col + 1 < game.size {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let x = area.x + area.width.saturating_sub(board_w) / 2;
    let y = area.y + area.height.saturating_sub(board_h) / 2;
    let board_area = Rect::new(x, y, board_w.min(area.width), board_h.min(area.height));
    frame.render_widget(Paragraph::new(lines), board_area);
}

fn health_color(health: u32) -> Color {
    if health > 60 {
        Color::Green
    } else if health > 30 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &GridGame) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", label),
            Span::styled(game.difficulty.name(), value),
        ]),
        Line::from(vec![
            Span::styled("Health: ", label),
            Span::styled(
                game.health.to_string(),
                Style::default()
                    .fg(health_color(game.health))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Moves: ", label),
            Span::styled(game.moves.to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Move cost: ", label),
            Span::styled(format!("-{}", game.move_cost), value),
        ]),
        Line::from(vec![
            Span::styled("Enemy hit: ", label),
            Span::styled(format!("-{}", game.enemy_hit_penalty), value),
        ]),
        Line::from(""),
        legend_line(CellKind::Player, "You"),
        legend_line(CellKind::Goal, "Goal"),
        legend_line(CellKind::Enemy, "Enemy"),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn legend_line(kind: CellKind, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", kind.glyph()),
            Style::default().fg(CELL_FG).bg(kind.background()),
        ),
        Span::styled(format!(" {}", text), Style::default().fg(Color::Gray)),
    ])
}
