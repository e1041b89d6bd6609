//! Main menu, difficulty picker and high-score table.

use super::game_common::{centered_rect, controls_line};
use crate::app::{App, MenuItem};
use crate::game::Difficulty;
use crate::high_scores::HighScores;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PANEL_WIDTH: u16 = 40;

/// Split a centered bordered panel into title, body and controls rows.
fn panel(frame: &mut Frame, area: Rect, title: &str, body_height: u16) -> (Rect, Rect, Rect) {
    frame.render_widget(Clear, area);
    let outer = centered_rect(area, PANEL_WIDTH, body_height + 8);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(body_height),
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    let heading = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    (chunks[0], chunks[1], chunks[2])
}

/// Selectable list lines with a `>` marker on the selected entry.
fn choice_lines<'a>(labels: impl Iterator<Item = &'a str>, selected: usize) -> Vec<Line<'a>> {
    labels
        .enumerate()
        .map(|(i, label)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("> {} <", label),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(label, Style::default().fg(Color::White)))
            }
        })
        .collect()
}

pub fn render_main_menu(frame: &mut Frame, area: Rect, app: &App) {
    let body_height = MenuItem::ALL.len() as u16 * 2 + 1;
    let (_, body, controls) = panel(frame, area, "GRID GAME", body_height);

    let mut lines = Vec::new();
    for line in choice_lines(MenuItem::ALL.iter().map(|m| m.label()), app.menu_index) {
        lines.push(line);
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!("Difficulty: {}", app.difficulty),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    frame.render_widget(
        controls_line(&[("[Up/Down]", "Navigate"), ("[Enter]", "Select"), ("[Q]", "Quit")]),
        controls,
    );
}

pub fn render_difficulty_select(frame: &mut Frame, area: Rect, app: &App) {
    let body_height = Difficulty::ALL.len() as u16 * 2;
    let (_, body, controls) = panel(frame, area, "Choose Difficulty", body_height);

    let mut lines = Vec::new();
    let labels = Difficulty::ALL.iter().map(|d| d.name());
    for (line, difficulty) in choice_lines(labels, app.difficulty_index)
        .into_iter()
        .zip(Difficulty::ALL)
    {
        lines.push(line);
        lines.push(Line::from(Span::styled(
            format!(
                "{} enemies, -{} health per move",
                difficulty.enemy_count(),
                difficulty.move_cost()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    frame.render_widget(
        controls_line(&[("[Enter]", "Choose"), ("[Esc]", "Back")]),
        controls,
    );
}

pub fn render_high_scores(frame: &mut Frame, area: Rect, scores: &HighScores) {
    let body_height = Difficulty::ALL.len() as u16 + 1;
    let (_, body, controls) = panel(frame, area, "High Scores", body_height);

    let lines: Vec<Line> = Difficulty::ALL
        .iter()
        .map(|&d| {
            Line::from(vec![
                Span::styled(format!("{:<8}", format!("{}:", d)), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:>4}", scores.get(d)),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    frame.render_widget(controls_line(&[("[Esc/Enter]", "Back")]), controls);
}
