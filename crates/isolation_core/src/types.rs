/// One of the two competitors. Used only as a key when querying moves,
/// locations, or scores from a specific side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A board cell as a (row, col) pair. Doubles as a move: in Isolation a
/// move is fully described by its destination cell.
///
/// `Move::NONE` is the forfeit sentinel: no legal move available, or search
/// was cut off before any move was established.
///
/// The derived `Ord` is row-major, matching the order the board generates
/// moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True for the forfeit sentinel.
    pub fn is_none(self) -> bool {
        self == Move::NONE
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "--")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
