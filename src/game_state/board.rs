//! 8x8 mailbox board.
//!
//! The board is a plain `Copy` value, so the legality filter can take a
//! scratch copy for every hypothetical move without touching the live game.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard initial position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back_rank = color.back_rank();
            let pawn_rank = color.pawn_start_rank();
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file as u8;
                board.set(Square::new(back_rank, file), Some(Piece::new(color, *kind)));
                board.set(
                    Square::new(pawn_rank, file),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Removes and returns whatever sits on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares in row-major order (a8 first).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
            .map(|(square, _)| square)
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| *p == piece).count()
    }
}
