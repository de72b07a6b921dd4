use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind},
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, List, ListItem, Widget},
};
use tictactoe::{Game, MoveEntry};

use crate::app::Message;

/// The history list: one entry per recorded board.
pub struct MoveList {
    entries: Vec<MoveEntry>,
    selected: usize,
}

impl MoveList {
    pub fn new(game: &Game) -> Self {
        Self {
            entries: game.moves().collect(),
            selected: game.current_move(),
        }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn update(&mut self, event: &Event, area: Rect) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1).min(self.entries.len().saturating_sub(1));
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Home => self.selected = 0,
                KeyCode::End => self.selected = self.entries.len().saturating_sub(1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    return self.entries.get(self.selected).map(|e| Message::JumpTo(e.index));
                }
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let index = entry_at(area, Position::new(mouse.column, mouse.row))?;
                let entry = self.entries.get(index)?;
                self.selected = index;
                return Some(Message::JumpTo(entry.index));
            }
            _ => {}
        }
        None
    }

    pub fn on_state_change(&mut self, game: &Game) {
        *self = MoveList::new(game);
    }

    pub fn draw(&self, active: bool) -> impl Widget + '_ {
        let border_style = if active {
            Style::new()
        } else {
            Style::new().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title(Line::raw("History").left_aligned());
        let items = self.entries.iter().enumerate().map(|(idx, entry)| {
            let cursor = if active && idx == self.selected { '>' } else { ' ' };
            let item = ListItem::new(format!("{cursor}{}. {entry}", entry.index + 1));
            if entry.is_current {
                item.style(Style::new().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            } else {
                item
            }
        });
        List::new(items).block(block)
    }
}

/// Index of the entry drawn at `position` when the list fills `area`.
fn entry_at(area: Rect, position: Position) -> Option<usize> {
    let inner = Block::bordered().inner(area);
    if !inner.contains(position) {
        return None;
    }
    Some(usize::from(position.y - inner.y))
}
