/// Status is the lifecycle of one game session.
/// `Win` and `Lose` are terminal until the next restart.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Status {
    #[default]
    Idle,
    Playing,
    Win,
    Lose,
}

impl Status {
    /// Only a running game accepts moves
    pub const fn accepts_moves(self) -> bool {
        matches!(self, Status::Playing)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Win | Status::Lose)
    }

    /// Display label for the front end
    pub const fn label(self) -> &'static str {
        match self {
            Status::Idle => "Press Start",
            Status::Playing => "Playing",
            Status::Win => "You win!",
            Status::Lose => "Game over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(Status::default(), Status::Idle);
    }

    #[test]
    fn test_only_playing_accepts_moves() {
        assert!(Status::Playing.accepts_moves());
        assert!(!Status::Idle.accepts_moves());
        assert!(!Status::Win.accepts_moves());
        assert!(!Status::Lose.accepts_moves());
    }

    #[test]
    fn test_terminal_states() {
        assert!(Status::Win.is_terminal());
        assert!(Status::Lose.is_terminal());
        assert!(!Status::Idle.is_terminal());
    }
}
