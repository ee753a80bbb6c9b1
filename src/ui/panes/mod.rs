//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with line numbers, highlighting and the error line
//! - [`messages`]: Token listing and verdict, or the error alone
//! - [`tables`]: Tabbed view of the fixed and per-run tables and the lexer trace
//! - [`status`]: Status bar with keybindings and the verdict
//!
//! Each pane module exports a primary `render_*` function. Scroll offsets are
//! owned by the app and clamped by the pane that uses them.

pub mod messages;
pub mod source;
pub mod status;
pub mod tables;

pub use messages::render_messages_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tables::{render_tables_pane, TableTab};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all bordered panes.
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so that a list of `total` rows fills `visible` rows.
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
