//! Pieces shared by every screen: the controls hint line and modal notices.

use crate::app::{Notice, NoticeKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Centered "[key] action  [key] action" hint line.
pub fn controls_line<'a>(controls: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

impl NoticeKind {
    pub fn color(self) -> Color {
        match self {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Victory => Color::Green,
            NoticeKind::Defeat => Color::Red,
            NoticeKind::Error => Color::Yellow,
        }
    }
}

/// A rect of at most `width`×`height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a centered modal with the notice title, its lines and a
/// "[Press any key]" hint.
pub fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let color = notice.kind.color();

    let widest = notice
        .lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(notice.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let width = (widest + 8).max(30);
    let height = notice.lines.len() as u16 + 6;
    let modal = centered_rect(area, width, height);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = vec![
        Line::from(Span::styled(
            notice.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        notice
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Press any key]",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let r = centered_rect(area, 40, 10);
        assert_eq!(r, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 6);
        let r = centered_rect(area, 40, 10);
        assert_eq!(r, area);
    }
}
