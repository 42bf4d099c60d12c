use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// The two supported players. Adding a player means adding a variant here
/// and a color in [`Player::color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Orange,
    Green,
}

impl Player {
    #[cfg(test)]
    pub const ALL: [Player; 2] = [Player::Orange, Player::Green];

    pub fn from_index(index: i32) -> Result<Self, BoardError> {
        match index {
            0 => Ok(Player::Orange),
            1 => Ok(Player::Green),
            _ => Err(BoardError::PlayerIndexOutOfRange { index }),
        }
    }

    #[cfg(test)]
    pub fn index(self) -> i32 {
        match self {
            Player::Orange => 0,
            Player::Green => 1,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Player::Orange => "#ff6600",
            Player::Green => "#00dd63",
        }
    }
}

/// Blob color for a raw player index.
pub fn blob_color(player_index: i32) -> Result<&'static str, BoardError> {
    Player::from_index(player_index).map(Player::color)
}
