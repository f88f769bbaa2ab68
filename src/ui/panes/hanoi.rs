//! Tower of Hanoi pane: three pegs drawn as text columns

use super::pane_block;
use crate::algorithms::hanoi::HanoiFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PEG_NAMES: [&str; 3] = ["A", "B", "C"];

/// Render one row of one peg, `width` columns wide
fn peg_cell(disk: Option<u32>, width: usize) -> Span<'static> {
    match disk {
        Some(d) => {
            let disk_width = 2 * d as usize + 1;
            Span::styled(
                format!("{:^width$}", "█".repeat(disk_width), width = width),
                Style::default().fg(DEFAULT_THEME.bar),
            )
        }
        None => Span::styled(
            format!("{:^width$}", "│", width = width),
            Style::default().fg(DEFAULT_THEME.peg),
        ),
    }
}

pub fn render_hanoi_pane(frame: &mut Frame, area: Rect, state: Option<&HanoiFrame>, disks: usize) {
    let title = format!("Tower of Hanoi ({} disks)", disks);
    let block = pane_block(&title);

    let Some(state) = state else {
        let paragraph = Paragraph::new("(waiting for first step)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let pegs = state.towers.pegs();
    let width = 2 * disks + 5;
    let height = disks + 1;

    let mut lines = Vec::with_capacity(height + 4);
    for row in (0..height).rev() {
        let spans: Vec<Span> = pegs
            .iter()
            .map(|peg| peg_cell(peg.get(row).copied(), width))
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        "▀".repeat(width * pegs.len()),
        Style::default().fg(DEFAULT_THEME.peg),
    )));
    let labels: Vec<Span> = PEG_NAMES
        .iter()
        .map(|name| Span::raw(format!("{:^width$}", name, width = width)))
        .collect();
    lines.push(Line::from(labels));
    lines.push(Line::from(""));

    let move_text = match state.last_move {
        Some(mv) => format!(
            "Moved disk from {} to {}",
            PEG_NAMES.get(mv.from).unwrap_or(&"?"),
            PEG_NAMES.get(mv.to).unwrap_or(&"?")
        ),
        None => "Initial position".to_string(),
    };
    lines.push(Line::from(Span::styled(
        move_text,
        Style::default()
            .fg(DEFAULT_THEME.highlight)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
