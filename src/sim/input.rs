//! Paddle commands and key mapping

use serde::{Deserialize, Serialize};

use super::state::Paddle;

/// A lateral paddle move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleCommand {
    Left,
    Right,
}

impl PaddleCommand {
    /// Map a key name (arrow keysym or letter) to a command
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Left" | "a" => Some(PaddleCommand::Left),
            "Right" | "d" => Some(PaddleCommand::Right),
            _ => None,
        }
    }

    pub fn apply(self, paddle: &mut Paddle) {
        match self {
            PaddleCommand::Left => paddle.move_left(),
            PaddleCommand::Right => paddle.move_right(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Arena;

    #[test]
    fn test_key_mapping() {
        assert_eq!(PaddleCommand::from_key("Left"), Some(PaddleCommand::Left));
        assert_eq!(PaddleCommand::from_key("a"), Some(PaddleCommand::Left));
        assert_eq!(PaddleCommand::from_key("Right"), Some(PaddleCommand::Right));
        assert_eq!(PaddleCommand::from_key("d"), Some(PaddleCommand::Right));
        assert_eq!(PaddleCommand::from_key("A"), None);
        assert_eq!(PaddleCommand::from_key("space"), None);
    }

    #[test]
    fn test_apply_moves_paddle() {
        let mut paddle = Paddle::new(Arena::new(1000.0, 500.0));
        PaddleCommand::Left.apply(&mut paddle);
        assert_eq!(paddle.center_x, 470.0);
        PaddleCommand::Right.apply(&mut paddle);
        PaddleCommand::Right.apply(&mut paddle);
        assert_eq!(paddle.center_x, 530.0);
    }
}
