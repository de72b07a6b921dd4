use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph, Widget},
};
use ttt_types::{Mark, Square};

use crate::app::Message;

/// One square of the board. Holds nothing but what it has to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    square: Square,
    value: Option<Mark>,
    color: Color,
    winning: bool,
}

impl CellView {
    #[must_use]
    pub fn new(square: Square, value: Option<Mark>, color: Color, winning: bool) -> Self {
        Self {
            square,
            value,
            color,
            winning,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<Mark> {
        self.value
    }

    /// What pressing this cell asks the game to do.
    #[must_use]
    pub fn activate(&self) -> Message {
        Message::Play(self.square)
    }

    pub fn draw(&self, focused: bool) -> impl Widget + '_ {
        CellWidget {
            cell: self,
            focused,
        }
    }
}

struct CellWidget<'a> {
    cell: &'a CellView,
    focused: bool,
}

impl Widget for CellWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(Color::DarkGray)
        };
        let block = Block::bordered().border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let mut style = Style::new().fg(self.cell.color).add_modifier(Modifier::BOLD);
        if self.cell.winning {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let glyph = self.cell.value.map_or(' ', Mark::glyph);
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        Paragraph::new(glyph.to_string())
            .style(style)
            .centered()
            .render(middle, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_glyph_in_the_middle() {
        let square = Square::new(0).unwrap();
        let cell = CellView::new(square, Some(Mark::O), Color::Blue, false);
        let area = Rect::new(0, 0, 7, 5);
        let mut buf = Buffer::empty(area);
        cell.draw(false).render(area, &mut buf);
        assert_eq!(buf[(3, 2)].symbol(), "O");
        assert_eq!(buf[(3, 2)].fg, Color::Blue);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
    }

    #[test]
    fn activation_plays_its_square() {
        let square = Square::new(7).unwrap();
        let cell = CellView::new(square, None, Color::Red, false);
        assert!(matches!(cell.activate(), Message::Play(s) if s == square));
    }
}
