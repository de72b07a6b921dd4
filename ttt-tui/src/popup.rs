use itertools::Itertools;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const KEYS: [(&str, &str); 8] = [
    ("arrows / hjkl", "move the cursor"),
    ("enter / space", "play the cell or jump to the move"),
    ("1-9", "play that cell"),
    ("mouse", "click a cell or a move"),
    ("tab", "switch between board and history"),
    ("r", "back to the start"),
    ("?", "toggle this help"),
    ("q / esc", "quit"),
];

#[derive(Debug, Default)]
pub struct Popup<'a> {
    title: Line<'a>,
    content: Text<'a>,
    border_style: Style,
    title_style: Style,
    style: Style,
}

impl<'a> Popup<'a> {
    pub fn title(self, title: impl Into<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }
    pub fn content(self, content: impl Into<Text<'a>>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }
    pub fn border_style(self, border_style: Style) -> Self {
        Self {
            border_style,
            ..self
        }
    }

    pub fn help() -> Self {
        let content = KEYS
            .iter()
            .map(|(key, action)| format!("{key:<14} {action}"))
            .join("\n");
        Popup::default()
            .title("Keys")
            .content(content)
            .border_style(Style::new().fg(Color::Yellow))
    }
}

impl Widget for Popup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // ensure that all cells under the popup are cleared to avoid leaking content
        Clear.render(area, buf);
        let block = Block::new()
            .title(self.title)
            .title_style(self.title_style)
            .borders(Borders::ALL)
            .border_style(self.border_style);
        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .style(self.style)
            .left_aligned()
            .block(block)
            .render(area, buf);
    }
}

/// A `width` by `height` rectangle centred in `area`, clipped to it.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
    .intersection(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_and_clipped() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(centered(Rect::new(0, 0, 20, 5), 40, 10), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn help_lists_keys() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        Popup::help().render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Keys"));
        assert!(text.contains("toggle this help"));
    }
}
