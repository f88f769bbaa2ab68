//! Sieve pane: one cell per index, colored by state

use super::pane_block;
use crate::algorithms::sieve::SieveFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CELL_WIDTH: usize = 5;

pub fn render_sieve_pane(frame: &mut Frame, area: Rect, sieve: Option<&SieveFrame>, limit: usize) {
    let title = format!("Sieve of Eratosthenes (N = {})", limit);
    let block = pane_block(&title);

    let Some(sieve) = sieve else {
        let paragraph = Paragraph::new("(not started)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let per_row = (area.width.saturating_sub(2) as usize / CELL_WIDTH).max(1);

    let mut lines: Vec<Line> = sieve
        .is_prime
        .chunks(per_row)
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, &is_prime)| {
                    let index = row * per_row + col;
                    let bg = if sieve.pivot == Some(index) {
                        DEFAULT_THEME.highlight
                    } else if is_prime {
                        DEFAULT_THEME.success
                    } else {
                        DEFAULT_THEME.error
                    };
                    Span::styled(
                        format!("{:>width$} ", index, width = CELL_WIDTH - 1),
                        Style::default().bg(bg).fg(Color::Black),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));
    let pivot_text = match sieve.pivot {
        Some(p) => format!("Current pivot: {}", p),
        None => format!("Primes: {}", sieve.primes().len()),
    };
    lines.push(Line::from(Span::styled(
        pivot_text,
        Style::default()
            .fg(DEFAULT_THEME.highlight)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
