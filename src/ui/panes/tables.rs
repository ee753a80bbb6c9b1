//! Tables pane: fixed keyword/separator tables, the per-run identifier and
//! number tables, declared symbols and the lexer trace, one tab each.

use crate::analysis::Analysis;
use crate::parser::token::{printable, KEYWORDS, SEPARATORS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Row, Table, Tabs},
    Frame,
};

use super::{border_style, clamp_scroll};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableTab {
    Keywords,
    Separators,
    Identifiers,
    Numbers,
    Symbols,
    Trace,
}

impl TableTab {
    pub const ALL: [TableTab; 6] = [
        TableTab::Keywords,
        TableTab::Separators,
        TableTab::Identifiers,
        TableTab::Numbers,
        TableTab::Symbols,
        TableTab::Trace,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TableTab::Keywords => "Keywords",
            TableTab::Separators => "Separators",
            TableTab::Identifiers => "Identifiers",
            TableTab::Numbers => "Numbers",
            TableTab::Symbols => "Symbols",
            TableTab::Trace => "Trace",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Header and rows of one tab.
pub fn tab_rows(tab: TableTab, analysis: &Analysis) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let numbered = |items: Vec<String>| -> Vec<Vec<String>> {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| vec![(i + 1).to_string(), item])
            .collect()
    };

    match tab {
        TableTab::Keywords => (
            vec!["#", "keyword"],
            numbered(KEYWORDS.iter().map(|k| k.to_string()).collect()),
        ),
        TableTab::Separators => (
            vec!["#", "separator"],
            numbered(SEPARATORS.iter().map(|s| format!("'{}'", printable(s))).collect()),
        ),
        TableTab::Identifiers => (
            vec!["#", "identifier"],
            numbered(analysis.lexed.identifiers.iter().map(str::to_string).collect()),
        ),
        TableTab::Numbers => (
            vec!["#", "number"],
            numbered(analysis.lexed.numbers.iter().map(str::to_string).collect()),
        ),
        TableTab::Symbols => (
            vec!["name", "type"],
            analysis
                .symbols
                .iter()
                .map(|(name, ty)| vec![name.to_string(), ty.to_string()])
                .collect(),
        ),
        TableTab::Trace => (
            vec!["#", "event"],
            numbered(analysis.trace().to_vec()),
        ),
    }
}

/// Render the tables pane
pub fn render_tables_pane(
    frame: &mut Frame,
    area: Rect,
    analysis: &Analysis,
    tab: TableTab,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Tables ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let titles: Vec<Line> = TableTab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(tab.index())
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let (header, rows) = tab_rows(tab, analysis);
    // one row is taken by the header
    let visible_height = chunks[1].height.saturating_sub(1).max(1) as usize;
    clamp_scroll(scroll_offset, rows.len(), visible_height);

    let widths = if header[0] == "#" {
        [Constraint::Length(4), Constraint::Min(0)]
    } else {
        [Constraint::Percentage(50), Constraint::Percentage(50)]
    };
    let body: Vec<Row> = rows
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|cells| Row::new(cells).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();
    let table = Table::new(body, widths).header(
        Row::new(header).style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
    );
    frame.render_widget(table, chunks[1]);
}
