//! Source pane rendering with syntax highlighting
//!
//! Displays the analysed program with line numbers. Keywords, word operators
//! and numbers are colored with a small per-line scanner; the line of the
//! first error, if any, is drawn on a red background.

use crate::parser::token::{is_keyword, is_letter_separator};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{border_style, clamp_scroll};

/// Highlight one line of source. `in_comment` carries an open `(*` across
/// lines.
fn highlight_line(line: &str, in_comment: &mut bool) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if *in_comment {
            let start = i;
            if chars[i..].starts_with(&['(', '*']) {
                i += 2;
            }
            while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&')')) {
                i += 1;
            }
            if i < chars.len() {
                i += 2;
                *in_comment = false;
            }
            let text: String = chars[start..i].iter().collect();
            spans.push(Span::styled(text, Style::default().fg(DEFAULT_THEME.comment)));
            continue;
        }

        let c = chars[i];
        if c == '(' && chars.get(i + 1) == Some(&'*') {
            *in_comment = true;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let style = word_style(&word);
            spans.push(Span::styled(word, style));
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '.') {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            spans.push(Span::styled(text, Style::default().fg(DEFAULT_THEME.number)));
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    Line::from(spans)
}

fn word_style(word: &str) -> Style {
    match word {
        "integer" | "real" | "boolean" => Style::default().fg(DEFAULT_THEME.type_name),
        "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ if is_keyword(word) => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if is_letter_separator(word) => Style::default().fg(DEFAULT_THEME.separator),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    error_line: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = source.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    // comment state has to be tracked from the first line, visible or not
    let mut in_comment = false;
    let rendered: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let mut content = highlight_line(line, &mut in_comment);

            let num_style = if Some(line_num) == error_line {
                for span in &mut content.spans {
                    span.style = Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD);
                }
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(rendered).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_words_and_numbers_are_split() {
        let mut in_comment = false;
        let line = highlight_line("a = 1ACh plus x", &mut in_comment);
        assert_eq!(texts(&line), vec!["a", " ", "=", " ", "1ACh", " ", "plus", " ", "x"]);
        assert_eq!(line.spans[6].style.fg, Some(DEFAULT_THEME.separator));
        assert_eq!(line.spans[4].style.fg, Some(DEFAULT_THEME.number));
    }

    #[test]
    fn test_comment_spans_lines() {
        let mut in_comment = false;
        let first = highlight_line("a = 1 (* note", &mut in_comment);
        assert!(in_comment);
        assert_eq!(first.spans.last().unwrap().content, "(* note");

        let second = highlight_line("more *) end", &mut in_comment);
        assert!(!in_comment);
        assert_eq!(second.spans[0].content, "more *)");
        assert_eq!(second.spans[0].style.fg, Some(DEFAULT_THEME.comment));
    }
}
