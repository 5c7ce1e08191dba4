//! The single owned game and its engine boundary.
//!
//! `GameState` stores the board, turn and rule flags, clocks, cached king
//! squares, the derived check flag and status, plus the move history. Callers
//! drive a game through `legal_moves`, `execute`, `undo` and `restart`; every
//! other method is a read-only accessor.

use tracing::{debug, info, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::*;
use crate::game_state::move_history::MoveHistory;
use crate::move_generation::game_status::{evaluate_status, status_message, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves_for_piece};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    // --- Clocks ---
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    // --- Cached / derived ---
    /// Indexed by [`Color::index`].
    pub(crate) king_squares: [Square; 2],
    pub(crate) in_check: bool,
    pub(crate) status: GameStatus,

    pub(crate) history: MoveHistory,
}

/// Result of a completed `execute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteResult {
    pub record: MoveRecord,
    pub status: GameStatus,
    /// Check flag for the side now to move.
    pub in_check: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteOutcome {
    Completed(ExecuteResult),
    /// A pawn reached the far rank without a promotion kind. Nothing changed;
    /// call `execute` again with the same squares and a kind.
    PendingPromotion(Move),
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move.
    pub fn new_game() -> Self {
        Self::with_board(
            Board::standard(),
            Color::White,
            CastlingRights::ALL,
            [
                Square::new(Color::White.back_rank(), KING_HOME_FILE),
                Square::new(Color::Black.back_rank(), KING_HOME_FILE),
            ],
        )
    }

    /// Builds an arbitrary position from a piece list.
    ///
    /// Castling rights whose king or rook is off its home square are dropped.
    /// The en passant target starts empty and the clocks at 0 / 1.
    pub fn from_pieces(
        pieces: &[(Square, Piece)],
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> Result<Self, ChessErrors> {
        let mut board = Board::empty();
        for (square, piece) in pieces {
            if !board.is_empty(*square) {
                return Err(ChessErrors::InvalidPosition(format!(
                    "more than one piece on {square}"
                )));
            }
            if piece.kind == PieceKind::Pawn
                && (square.rank() == Color::White.back_rank()
                    || square.rank() == Color::Black.back_rank())
            {
                return Err(ChessErrors::InvalidPosition(format!(
                    "pawn on back rank square {square}"
                )));
            }
            board.set(*square, Some(*piece));
        }

        let mut king_squares = [Square::new(0, 0); 2];
        for color in [Color::White, Color::Black] {
            let king = Piece::new(color, PieceKind::King);
            if board.count(king) != 1 {
                return Err(ChessErrors::InvalidPosition(format!(
                    "{color} must have exactly one king"
                )));
            }
            king_squares[color.index()] = board
                .find_king(color)
                .ok_or_else(|| ChessErrors::InvalidPosition(format!("{color} has no king")))?;
        }

        let mut rights = castling_rights;
        for color in [Color::White, Color::Black] {
            let king_home = Square::new(color.back_rank(), KING_HOME_FILE);
            for wing in CastlingWing::BOTH {
                let rook_home = Square::new(color.back_rank(), wing.rook_home_file());
                if king_squares[color.index()] != king_home
                    || board.get(rook_home) != Some(Piece::new(color, PieceKind::Rook))
                {
                    rights.revoke(color, wing);
                }
            }
        }

        let game = Self::with_board(board, side_to_move, rights, king_squares);

        let waiting = side_to_move.opposite();
        if is_king_in_check(&game, waiting) {
            return Err(ChessErrors::InvalidPosition(format!(
                "{waiting} is in check but not to move"
            )));
        }

        Ok(game)
    }

    fn with_board(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        king_squares: [Square; 2],
    ) -> Self {
        let mut game = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares,
            in_check: false,
            status: GameStatus::Normal,
            history: MoveHistory::new(),
        };
        game.in_check = is_king_in_check(&game, side_to_move);
        game.status = evaluate_status(&game);
        game
    }

    /// Back to the standard initial position with an empty history.
    pub fn restart(&mut self) {
        *self = Self::new_game();
        debug!("game restarted");
    }

    // --- Queries ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn status_message(&self) -> String {
        status_message(self.status, self.side_to_move)
    }

    /// Legal moves of the piece on `square`.
    pub fn legal_moves(&self, square: Square) -> Result<Vec<Move>, ChessErrors> {
        let piece = self.mover_piece(square)?;
        Ok(legal_moves_for_piece(self, square, piece))
    }

    /// Legal moves of every piece of the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        all_legal_moves(self)
    }

    // --- Mutation ---

    /// Plays `mv` if it is legal.
    ///
    /// `promotion` takes precedence over `mv.promotion`. A promoting move
    /// without either yields [`ExecuteOutcome::PendingPromotion`] and leaves
    /// the game untouched. The move's `kind` is not trusted; the move is
    /// matched against the legal set by its squares.
    pub fn execute(
        &mut self,
        mv: Move,
        promotion: Option<PieceKind>,
    ) -> Result<ExecuteOutcome, ChessErrors> {
        if self.status.is_terminal() {
            return Err(ChessErrors::NoActiveGame(self.status));
        }

        let legal = self.legal_moves(mv.from)?;
        let candidate = legal
            .iter()
            .find(|candidate| candidate.same_squares(&mv))
            .copied()
            .ok_or_else(|| ChessErrors::IllegalMove(format!("{}{}", mv.from, mv.to)))?;

        let choice = promotion.or(mv.promotion);
        let chosen = match (candidate.promotion.is_some(), choice) {
            (true, None) => {
                let pending = candidate.without_promotion();
                trace!(from = %pending.from, to = %pending.to, "promotion pending");
                return Ok(ExecuteOutcome::PendingPromotion(pending));
            }
            (true, Some(kind)) if kind.is_promotion_choice() => candidate.with_promotion(kind),
            (true, Some(kind)) => {
                return Err(ChessErrors::IllegalMove(format!(
                    "a pawn cannot promote to a {kind:?}"
                )))
            }
            (false, Some(_)) => {
                return Err(ChessErrors::IllegalMove(format!(
                    "{}{} is not a promotion",
                    mv.from, mv.to
                )))
            }
            (false, None) => candidate,
        };

        let record = apply_move(self, chosen)?.clone();
        self.status = evaluate_status(self);

        debug!(
            notation = %record.notation,
            status = %self.status,
            "move executed"
        );
        if self.status.is_terminal() {
            info!(status = %self.status, "{}", self.status_message());
        }

        Ok(ExecuteOutcome::Completed(ExecuteResult {
            record,
            status: self.status,
            in_check: self.in_check,
        }))
    }

    /// Takes back the latest move. `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, ChessErrors> {
        if self.status.is_terminal() {
            return Err(ChessErrors::NoActiveGame(self.status));
        }

        match undo_move(self) {
            None => Ok(false),
            Some(record) => {
                self.status = evaluate_status(self);
                debug!(notation = %record.notation, status = %self.status, "move undone");
                Ok(true)
            }
        }
    }

    fn mover_piece(&self, square: Square) -> Result<Piece, ChessErrors> {
        let piece = self.board.get(square).ok_or(ChessErrors::EmptySquare(square))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::WrongTurn {
                square,
                piece_color: piece.color,
                side_to_move: self.side_to_move,
            });
        }
        Ok(piece)
    }
}
