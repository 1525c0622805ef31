#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disc {
    Dark,
    Light,
}

impl Disc {
    pub fn other(self) -> Disc {
        match self {
            Disc::Dark => Disc::Light,
            Disc::Light => Disc::Dark,
        }
    }
}

/// Board side length. Coordinates are 1-indexed: both row and col in 1..=8.
pub const BOARD_SIZE: u8 = 8;

/// The four central squares (rows/cols 4-5). Classic-rules games open here.
pub const CENTER_SQUARES: [Square; 4] = [
    Square { row: 4, col: 4 },
    Square { row: 4, col: 5 },
    Square { row: 5, col: 4 },
    Square { row: 5, col: 5 },
];

/// A 1-indexed board coordinate. `Ord` so that sorted-set iteration over
/// squares is deterministic (row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn on_board(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.row) && (1..=BOARD_SIZE).contains(&self.col)
    }

    /// Steps one cell in direction (dr, dc); None once off the board.
    pub fn step(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (1..=BOARD_SIZE as i8).contains(&row) && (1..=BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Algebraic form, column letter then row digit ("c4" = col 3, row 4).
    pub fn notation(self) -> String {
        let c = (b'a' + self.col - 1) as char;
        let r = (b'0' + self.row) as char;
        format!("{c}{r}")
    }

    pub fn from_notation(s: &str) -> Option<Square> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        Some(Square::new(b[1] - b'0', b[0] - b'a' + 1))
    }
}

/// Which opening rules a game is played under.
///
/// Othello seeds the four center squares before the first move; Classic
/// starts on an empty board and confines the first four plies to the
/// central 2x2 block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ruleset {
    Othello,
    Classic,
}

/// Move-selection policy for a computer opponent. `None` means a human is
/// playing that side; asking it for a move is an error, not a fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    None,
    Random,
    ShallowSearch,
    DeepHeuristicSearch,
}

/// Disc counts for both sides, for score display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub dark: u32,
    pub light: u32,
}

impl Score {
    pub fn for_side(self, side: Disc) -> u32 {
        match side {
            Disc::Dark => self.dark,
            Disc::Light => self.light,
        }
    }

    pub fn total(self) -> u32 {
        self.dark + self.light
    }
}
