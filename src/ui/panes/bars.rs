//! Sort pane: the working array as a bar chart

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Bar heights are offset so the smallest value still gets a visible bar
fn bar_heights(values: &[f64]) -> Vec<u64> {
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    values
        .iter()
        .map(|v| ((v - min) * 10.0).round() as u64 + 1)
        .collect()
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

pub fn render_sort_pane(frame: &mut Frame, area: Rect, title: &str, values: &[f64]) {
    let block = pane_block(title);

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let heights = bar_heights(values);
    let bars: Vec<Bar> = values
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(i, (&v, h))| {
            Bar::default()
                .value(h)
                .text_value(format_value(v))
                .label(Line::from(format!("{}", i)))
                .style(Style::default().fg(DEFAULT_THEME.bar))
                .value_style(Style::default().fg(Color::Black).bg(DEFAULT_THEME.bar))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = (inner_width / values.len().max(1)).saturating_sub(1).clamp(1, 7) as u16;

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
