use std::{io, ops::ControlFlow, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind},
    layout::{Constraint, Layout, Position, Rect},
    DefaultTerminal, Frame,
};
use tictactoe::Game;
use tracing::{debug, info, warn};
use ttt_types::Square;

use crate::{board::BoardView, config::Theme, moves::MoveList, popup::Popup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Board,
    Moves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Quit,
    Play(Square),
    JumpTo(usize),
    Restart,
}

pub struct App {
    game: Game,
    focus: Focus,
    board_view: BoardView,
    move_list: MoveList,
    show_help: bool,
    board_area: Rect,
    moves_area: Rect,
}

impl App {
    pub fn new(game: Game, theme: Theme) -> Self {
        let board_view = BoardView::new(&game, theme);
        let move_list = MoveList::new(&game);
        Self {
            game,
            focus: Focus::Board,
            board_view,
            move_list,
            show_help: false,
            board_area: Rect::default(),
            moves_area: Rect::default(),
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        info!(status = %self.game.status(), "session started");
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update()? {
                if self.apply(message).is_break() {
                    break;
                }
            }
        }
        info!(moves = self.game.len() - 1, status = %self.game.status(), "session ended");
        Ok(())
    }

    fn update(&mut self) -> io::Result<Option<Message>> {
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            return Ok(self.handle_event(&event));
        }
        Ok(None)
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.show_help {
                    self.show_help = false;
                    return matches!(key.code, KeyCode::Char('q')).then_some(Message::Quit);
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Some(Message::Quit),
                    KeyCode::Char('r') => return Some(Message::Restart),
                    KeyCode::Char('?') => self.show_help = true,
                    KeyCode::Tab | KeyCode::BackTab => {
                        self.focus = match self.focus {
                            Focus::Board => Focus::Moves,
                            Focus::Moves => Focus::Board,
                        };
                    }
                    _ => {
                        return match self.focus {
                            Focus::Board => self.board_view.update(event, self.board_area),
                            Focus::Moves => self.move_list.update(event, self.moves_area),
                        };
                    }
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                if self.board_area.contains(position) {
                    self.focus = Focus::Board;
                    return self.board_view.update(event, self.board_area);
                }
                if self.moves_area.contains(position) {
                    self.focus = Focus::Moves;
                    return self.move_list.update(event, self.moves_area);
                }
            }
            _ => {}
        }
        None
    }

    pub fn apply(&mut self, message: Message) -> ControlFlow<()> {
        match message {
            Message::Quit => return ControlFlow::Break(()),
            Message::Play(square) => {
                if !self.game.handle_click(square) {
                    debug!(%square, "cell not playable");
                }
            }
            Message::JumpTo(mv) => {
                if let Err(err) = self.game.jump_to(mv) {
                    warn!(%err, "jump rejected");
                }
            }
            Message::Restart => {
                if let Err(err) = self.game.jump_to(0) {
                    warn!(%err, "restart rejected");
                }
            }
        }
        self.on_state_change();
        ControlFlow::Continue(())
    }

    fn on_state_change(&mut self) {
        self.board_view.on_state_change(&self.game);
        self.move_list.on_state_change(&self.game);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let horizontal =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]);
        let [board, moves] = horizontal.areas(frame.area());
        self.board_area = board;
        self.moves_area = moves;
        frame.render_widget(self.board_view.draw(self.focus == Focus::Board), board);
        frame.render_widget(self.move_list.draw(self.focus == Focus::Moves), moves);
        if self.show_help {
            frame.render_widget(Popup::help(), crate::popup::centered(frame.area(), 56, 10));
        }
    }
}
