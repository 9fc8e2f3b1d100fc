//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a message dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Used for both title and border
    pub color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Rectangle of `width` x `height` centered in `area`, clipped to it
pub fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Bordered block on a black background, as every dialog uses
pub fn dialog_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black))
}

/// Render a centered message dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = config.max_width.saturating_sub(padding + 2) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);

    let hint_width = config
        .hint
        .as_ref()
        .map_or(0, |spans| spans.iter().map(|s| s.width()).sum::<usize>());
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.len() + 2)
        .max(hint_width) as u16;
    let dialog_width = (content_width + padding + 2).min(config.max_width);

    // Message lines, blank + hint, borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = (wrapped_lines.len() as u16 + hint_lines + 2).max(5);

    let dialog_area = centered_area(frame.area(), dialog_width, dialog_height);
    frame.render_widget(Clear, dialog_area);

    let mut content: Vec<Line> = wrapped_lines
        .into_iter()
        .map(|line| Line::from(format!("  {line}")))
        .collect();

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        let mut hint = vec![Span::raw("  ")];
        hint.extend(hint_spans);
        content.push(Line::from(hint));
    }

    let dialog = Paragraph::new(content)
        .block(dialog_block(config.title, config.color))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current_line.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Error: Permission denied (os error 13)", 16);
        assert_eq!(
            lines,
            vec!["Error:", "Permission", "denied (os error", "13)"]
        );
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_centered_area_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_area(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_area(area, 40, 40), area);
    }
}
