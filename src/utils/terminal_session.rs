//! Line-oriented game driver used by `plum_rules play`.
//!
//! A session owns one [`GameState`] and talks to it only through the public
//! engine boundary. It remembers a pending promotion between lines so that
//! `promote <q|r|b|n>` can finish the move.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::ExecuteOutcome;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_game_state;

pub const HELP_TEXT: &str = "commands: <move> (e2e4, e7e8q) | moves <square> | promote <q|r|b|n> | \
undo | restart | board | history | status | help | quit";

/// What the driver should print, and whether to stop reading input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReply {
    pub output: String,
    pub quit: bool,
}

impl SessionReply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct TerminalSession {
    game: GameState,
    pending_promotion: Option<Move>,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn pending_promotion(&self) -> Option<Move> {
        self.pending_promotion
    }

    /// Handles one input line. Engine errors become output text; they never
    /// end the session.
    pub fn handle_line(&mut self, line: &str) -> SessionReply {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return SessionReply::text("");
        };
        let argument = words.next();

        let result = match (command.to_ascii_lowercase().as_str(), argument) {
            ("quit" | "exit", _) => {
                return SessionReply {
                    output: "bye".to_owned(),
                    quit: true,
                }
            }
            ("help", _) => Ok(HELP_TEXT.to_owned()),
            ("board", _) => Ok(render_game_state(&self.game)),
            ("status", _) => Ok(self.game.status_message()),
            ("history", _) => Ok(self.history_text()),
            ("restart", _) => {
                self.game.restart();
                self.pending_promotion = None;
                Ok(format!("new game\n{}", self.game.status_message()))
            }
            ("undo", _) => self.undo(),
            ("moves", Some(square)) => self.moves_from(square),
            ("promote", Some(choice)) => self.promote(choice),
            ("moves" | "promote", None) => Ok(HELP_TEXT.to_owned()),
            (text, None) => self.play(text),
            _ => Ok(HELP_TEXT.to_owned()),
        };

        match result {
            Ok(output) => SessionReply::text(output),
            Err(err) => SessionReply::text(format!("error: {err}")),
        }
    }

    fn play(&mut self, text: &str) -> Result<String, ChessErrors> {
        let mv = long_algebraic_to_move(text, &self.game)?;
        self.pending_promotion = None;
        self.execute(mv, None)
    }

    fn promote(&mut self, choice: &str) -> Result<String, ChessErrors> {
        let Some(pending) = self.pending_promotion else {
            return Ok("no promotion is pending".to_owned());
        };
        let kind = match choice.to_ascii_lowercase().as_str() {
            "q" | "queen" => PieceKind::Queen,
            "r" | "rook" => PieceKind::Rook,
            "b" | "bishop" => PieceKind::Bishop,
            "n" | "knight" => PieceKind::Knight,
            _ => return Err(ChessErrors::InvalidAlgebraicString(choice.to_owned())),
        };
        self.execute(pending, Some(kind))
    }

    fn execute(&mut self, mv: Move, promotion: Option<PieceKind>) -> Result<String, ChessErrors> {
        match self.game.execute(mv, promotion)? {
            ExecuteOutcome::PendingPromotion(pending) => {
                self.pending_promotion = Some(pending);
                Ok(format!(
                    "{} promotes: choose with promote <q|r|b|n>",
                    move_to_long_algebraic(&pending)
                ))
            }
            ExecuteOutcome::Completed(result) => {
                self.pending_promotion = None;
                Ok(format!("{}\n{}", result.record.notation, self.game.status_message()))
            }
        }
    }

    fn undo(&mut self) -> Result<String, ChessErrors> {
        self.pending_promotion = None;
        if self.game.undo()? {
            Ok(format!("move undone\n{}", self.game.status_message()))
        } else {
            Ok("nothing to undo".to_owned())
        }
    }

    fn moves_from(&self, square: &str) -> Result<String, ChessErrors> {
        let from = algebraic_to_square(square)?;
        let mut targets: Vec<String> = self
            .game
            .legal_moves(from)?
            .iter()
            .map(move_to_long_algebraic)
            .collect();
        targets.dedup();
        if targets.is_empty() {
            Ok(format!("no legal moves from {from}"))
        } else {
            Ok(targets.join(" "))
        }
    }

    fn history_text(&self) -> String {
        let rows = self.game.history().numbered_rows();
        if rows.is_empty() {
            "no moves yet".to_owned()
        } else {
            rows.join("\n")
        }
    }
}
