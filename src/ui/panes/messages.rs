//! Messages pane: the token listing followed by the verdict

use crate::analysis::{Analysis, Verdict};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

use super::{border_style, clamp_scroll};

/// Lines shown in the messages pane. A rejected run shows the error alone.
pub fn message_lines(analysis: &Analysis) -> Vec<Line<'static>> {
    match &analysis.verdict {
        Verdict::Empty => vec![Line::styled(
            analysis.verdict.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )],
        Verdict::Rejected(err) => vec![Line::styled(
            err.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )],
        Verdict::Accepted => {
            let mut lines: Vec<Line> = analysis
                .listing()
                .iter()
                .map(|entry| Line::styled(entry.to_string(), Style::default().fg(DEFAULT_THEME.fg)))
                .collect();
            lines.push(Line::styled(
                analysis.verdict.to_string(),
                Style::default().fg(DEFAULT_THEME.success),
            ));
            lines
        }
    }
}

/// Render the messages pane
pub fn render_messages_pane(
    frame: &mut Frame,
    area: Rect,
    analysis: &Analysis,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Messages ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let lines = message_lines(analysis);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
