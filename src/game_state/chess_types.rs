//! Core value types shared by every engine subsystem.
//!
//! Squares live on a rank/file grid where rank `0` is the eighth rank (Black's
//! back rank) and rank `7` is the first rank (White's back rank). Every module
//! in the crate uses this orientation, including notation and rendering.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::chess_errors::ChessErrors;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::move_record::MoveRecord;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case notation letter. Pawns have none.
    #[inline]
    pub const fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    /// Whether a pawn may turn into this kind on the far rank.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A colored piece as it sits on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. Both components are always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSquare"))]
pub struct Square {
    rank: u8,
    file: u8,
}

/// Unchecked wire form of a [`Square`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSquare {
    rank: u8,
    file: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSquare> for Square {
    type Error = ChessErrors;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::try_new(raw.rank, raw.file).ok_or_else(|| {
            ChessErrors::InvalidPosition(format!(
                "square (rank {}, file {}) is off the board",
                raw.rank, raw.file
            ))
        })
    }
}

impl Square {
    /// Builds a square from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `rank` or `file` is greater than 7, like an out-of-bounds index.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "square coordinates must be in 0..=7");
        Self { rank, file }
    }

    #[inline]
    pub const fn try_new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Shifts the square, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file);
        let rank = char::from(b'8' - self.rank);
        write!(f, "{file}{rank}")
    }
}

/// Side of the board a castling move heads towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingWing {
    Kingside,
    Queenside,
}

impl CastlingWing {
    pub const BOTH: [CastlingWing; 2] = [CastlingWing::Kingside, CastlingWing::Queenside];

    #[inline]
    pub const fn rook_home_file(self) -> u8 {
        match self {
            CastlingWing::Kingside => 7,
            CastlingWing::Queenside => 0,
        }
    }

    #[inline]
    pub const fn rook_castled_file(self) -> u8 {
        match self {
            CastlingWing::Kingside => 5,
            CastlingWing::Queenside => 3,
        }
    }

    #[inline]
    pub const fn king_destination_file(self) -> u8 {
        match self {
            CastlingWing::Kingside => 6,
            CastlingWing::Queenside => 2,
        }
    }

    /// Files strictly between king and rook; all must be empty.
    #[inline]
    pub const fn between_files(self) -> &'static [u8] {
        match self {
            CastlingWing::Kingside => &[5, 6],
            CastlingWing::Queenside => &[1, 2, 3],
        }
    }

    /// File the king crosses before landing on its destination.
    #[inline]
    pub const fn king_transit_file(self) -> u8 {
        match self {
            CastlingWing::Kingside => 5,
            CastlingWing::Queenside => 3,
        }
    }

    /// The wing whose rook starts on `square` for `color`, if any.
    #[inline]
    pub fn from_rook_home(color: Color, square: Square) -> Option<Self> {
        if square.rank() != color.back_rank() {
            return None;
        }
        match square.file() {
            7 => Some(CastlingWing::Kingside),
            0 => Some(CastlingWing::Queenside),
            _ => None,
        }
    }
}

/// Four independent castling permissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    #[inline]
    pub const fn get(&self, color: Color, wing: CastlingWing) -> bool {
        match (color, wing) {
            (Color::White, CastlingWing::Kingside) => self.white_kingside,
            (Color::White, CastlingWing::Queenside) => self.white_queenside,
            (Color::Black, CastlingWing::Kingside) => self.black_kingside,
            (Color::Black, CastlingWing::Queenside) => self.black_queenside,
        }
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, wing: CastlingWing) {
        match (color, wing) {
            (Color::White, CastlingWing::Kingside) => self.white_kingside = false,
            (Color::White, CastlingWing::Queenside) => self.white_queenside = false,
            (Color::Black, CastlingWing::Kingside) => self.black_kingside = false,
            (Color::Black, CastlingWing::Queenside) => self.black_queenside = false,
        }
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastlingWing::Kingside);
        self.revoke(color, CastlingWing::Queenside);
    }
}
