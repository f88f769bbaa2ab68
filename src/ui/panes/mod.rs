//! TUI pane rendering modules
//!
//! Stateless render functions, one per visualization, plus the status bar.
//!
//! # Pane Modules
//!
//! - [`bars`]: sort array as a bar chart
//! - [`sieve`]: sieve grid with the current pivot highlighted
//! - [`hanoi`]: three pegs and the last move
//! - [`traversal`]: graph adjacency list or tree outline, plus visit order
//! - [`status`]: status bar with progress, keybindings and playback state

pub mod bars;
pub mod hanoi;
pub mod sieve;
pub mod status;
pub mod traversal;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::Style,
    widgets::{Block, Borders, Padding},
};

// Re-export render functions for convenience
pub use bars::render_sort_pane;
pub use hanoi::render_hanoi_pane;
pub use sieve::render_sieve_pane;
pub use status::{render_status_bar, StatusIndicator, StatusRenderData};
pub use traversal::{graph_rows, render_traversal_pane, tree_rows, StructureRow};

fn pane_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 1, 0, 0))
}
