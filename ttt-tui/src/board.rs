use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind},
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Widget},
};
use tictactoe::{Game, Status};
use ttt_types::{Square, ALL_SQUARES};

use crate::{app::Message, cell::CellView, config::Theme};

pub struct BoardView {
    cells: [CellView; Square::COUNT],
    status: Status,
    focused: Square,
    theme: Theme,
}

impl BoardView {
    pub fn new(game: &Game, theme: Theme) -> Self {
        let mut view = Self {
            cells: ALL_SQUARES.map(|square| CellView::new(square, None, Color::Reset, false)),
            status: game.status(),
            focused: Square::from_row_col(1, 1).unwrap_or_default(),
            theme,
        };
        view.on_state_change(game);
        view
    }

    #[must_use]
    pub fn focused(&self) -> Square {
        self.focused
    }

    /// `area` is where the board was last drawn, used to resolve mouse clicks.
    pub fn update(&mut self, event: &Event, area: Rect) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.move_focus(0, -1),
                KeyCode::Right | KeyCode::Char('l') => self.move_focus(0, 1),
                KeyCode::Up | KeyCode::Char('k') => self.move_focus(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => self.move_focus(1, 0),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    return Some(self.cells[self.focused.index()].activate());
                }
                KeyCode::Char(c) => {
                    let square = c
                        .to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .and_then(Square::from_number)?;
                    self.focused = square;
                    return Some(self.cells[square.index()].activate());
                }
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let square = cell_at(area, Position::new(mouse.column, mouse.row))?;
                self.focused = square;
                return Some(self.cells[square.index()].activate());
            }
            _ => {}
        }
        None
    }

    fn move_focus(&mut self, d_row: i8, d_col: i8) {
        let wrap = |v: u8, d: i8| {
            u8::try_from((i16::from(v) + i16::from(d)).rem_euclid(3)).unwrap_or_default()
        };
        let row = wrap(self.focused.row(), d_row);
        let col = wrap(self.focused.col(), d_col);
        if let Some(square) = Square::from_row_col(row, col) {
            self.focused = square;
        }
    }

    pub fn on_state_change(&mut self, game: &Game) {
        let board = game.current_board();
        let winning = board.winning_line();
        for square in ALL_SQUARES {
            let value = board.get(square);
            let color = value.map_or(Color::Reset, |mark| self.theme.marks[mark]);
            let in_line = winning.is_some_and(|line| line.contains(&square));
            self.cells[square.index()] = CellView::new(square, value, color, in_line);
        }
        self.status = game.status();
    }

    pub fn draw(&self, active: bool) -> impl Widget + '_ {
        BoardWidget { view: self, active }
    }
}

struct BoardWidget<'a> {
    view: &'a BoardView,
    active: bool,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status_style = match self.view.status {
            Status::Winner(mark) | Status::Next(mark) => {
                Style::new().fg(self.view.theme.marks[mark])
            }
            Status::Draw => Style::new(),
        }
        .add_modifier(Modifier::BOLD);
        let border_style = if self.active {
            Style::new()
        } else {
            Style::new().fg(Color::DarkGray)
        };
        board_block()
            .border_style(border_style)
            .title(Line::styled(self.view.status.to_string(), status_style).left_aligned())
            .render(area, buf);
        for (index, (cell, cell_area)) in self.view.cells.iter().zip(cell_areas(area)).enumerate() {
            let focused = self.active && index == self.view.focused.index();
            cell.draw(focused).render(cell_area, buf);
        }
    }
}

fn board_block() -> Block<'static> {
    Block::bordered()
}

/// Screen areas of the nine cells when the board is drawn into `area`.
#[must_use]
pub fn cell_areas(area: Rect) -> [Rect; Square::COUNT] {
    let inner = board_block().inner(area);
    let rows: [Rect; 3] = Layout::vertical([Constraint::Ratio(1, 3); 3]).areas(inner);
    let mut areas = [Rect::default(); Square::COUNT];
    for (row, row_area) in rows.into_iter().enumerate() {
        let cols: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(row_area);
        areas[row * 3..row * 3 + 3].copy_from_slice(&cols);
    }
    areas
}

#[must_use]
pub fn cell_at(area: Rect, position: Position) -> Option<Square> {
    cell_areas(area)
        .iter()
        .position(|cell| cell.contains(position))
        .and_then(|index| u8::try_from(index).ok())
        .and_then(Square::new)
}
