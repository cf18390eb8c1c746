use crate::types::{Move, Player};

pub const WIDTH: i8 = 7;
pub const HEIGHT: i8 = 7;

/// Knight-style move offsets. A placed player jumps like a chess knight.
const MOVE_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Game state for one Isolation position.
///
/// Cells are blocked permanently once either player visits them. Players
/// start off the board; their first move places them on any open cell, and
/// from then on they jump between open cells.
///
/// The struct is cheap to clone (a bitmask plus a few words), so search
/// code branches by cloning: `forecast_move` returns a new independent
/// board and never touches the original.
#[derive(Clone, Debug)]
pub struct Board {
    /// Bit `row * WIDTH + col` set once the cell has been visited.
    blocked: u64,
    locations: [Option<Move>; 2],
    active: Player,
    ply: u32,
}

impl Board {
    pub fn new() -> Self {
        Self {
            blocked: 0,
            locations: [None, None],
            active: Player::One,
            ply: 0,
        }
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    /// The player who is not to move, i.e. whoever made the last move.
    pub fn inactive_player(&self) -> Player {
        self.active.other()
    }

    /// Current cell of `player`, or `None` before its opening placement.
    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.idx()]
    }

    /// Number of half-moves played so far.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn in_bounds(mv: Move) -> bool {
        (0..HEIGHT).contains(&mv.row) && (0..WIDTH).contains(&mv.col)
    }

    /// True if the cell is on the board and has never been visited.
    pub fn is_open(&self, mv: Move) -> bool {
        Self::in_bounds(mv) && self.blocked & Self::bit(mv) == 0
    }

    /// Cells still available anywhere on the board. An upper bound on the
    /// number of plies the game can still last.
    pub fn open_cell_count(&self) -> u32 {
        (WIDTH as u32 * HEIGHT as u32) - self.blocked.count_ones()
    }

    /// Legal moves for the active player.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active)
    }

    /// Legal moves for an explicitly named player.
    pub fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.locations[player.idx()] {
            // Opening placement: any open cell.
            None => {
                let mut out = Vec::with_capacity(self.open_cell_count() as usize);
                for row in 0..HEIGHT {
                    for col in 0..WIDTH {
                        let mv = Move::new(row, col);
                        if self.is_open(mv) {
                            out.push(mv);
                        }
                    }
                }
                out
            }
            Some(loc) => MOVE_OFFSETS
                .iter()
                .map(|&(dr, dc)| Move::new(loc.row + dr, loc.col + dc))
                .filter(|&mv| self.is_open(mv))
                .collect(),
        }
    }

    /// True if `mv` is legal for the active player.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Play `mv` for the active player in place, switching the active side.
    /// The caller is responsible for passing a legal move.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal(mv), "illegal move {mv} for {:?}", self.active);
        self.blocked |= Self::bit(mv);
        self.locations[self.active.idx()] = Some(mv);
        self.active = self.active.other();
        self.ply += 1;
    }

    /// Return a new board with `mv` played and the active player switched.
    /// The receiver is left unchanged, so sibling search branches can keep
    /// using it.
    pub fn forecast_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    fn bit(mv: Move) -> u64 {
        1u64 << (mv.row as u32 * WIDTH as u32 + mv.col as u32)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let mv = Move::new(row, col);
                let c = if self.locations[0] == Some(mv) {
                    '1'
                } else if self.locations[1] == Some(mv) {
                    '2'
                } else if self.blocked & Self::bit(mv) != 0 {
                    '*'
                } else {
                    '-'
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
