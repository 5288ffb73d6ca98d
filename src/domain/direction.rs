//! The four moves a player can make.
//!
//! Vertical moves are executed on the transposed board and reversed moves on
//! mirrored rows, so every direction reduces to the same left-slide.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in a fixed order
    pub const fn all() -> [Direction; 4] {
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Look up a direction by name; unknown names yield None
    pub fn from_name(name: &str) -> Option<Direction> {
        Self::all()
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Up and Down run on the transposed board
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Right and Down slide toward the far edge
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}
