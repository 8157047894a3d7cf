#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl Type {
    /// Material value used by the evaluator. Kings are never traded so they
    /// count for nothing.
    pub fn value(&self) -> i32 {
        match self {
            Type::Pawn => 1,
            Type::Knight => 3,
            Type::Bishop => 3,
            Type::Rook => 5,
            Type::Queen => 9,
            Type::King => 0,
            Type::None => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Index into per-color tables such as the king squares.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub const fn none() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// True for a real piece of `color`; empty squares belong to nobody.
    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    pub fn is_kind(&self, color: Color, piece_type: Type) -> bool {
        self.color == color && self.piece_type == piece_type
    }

    /// Board diagram letter: upper case for white, lower case for black,
    /// `.` for an empty square.
    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
            Type::None => return '.',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
