//! Game constants and runtime configuration.

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 10;

/// Ship lengths of the standard fleet, in placement order.
pub const DEFAULT_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random draws allowed per ship before generation gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Input line that ends the game.
pub const QUIT_TOKEN: &str = "exit";

/// Where the hidden board is written at startup.
pub const DEFAULT_DUMP_PATH: &str = "computer_board.txt";

/// Standard 10×10 board packed into a `u128`.
pub type StandardBoard = crate::board::Board<u128, BOARD_SIZE>;

/// Standard game engine over [`StandardBoard`].
pub type StandardGame = crate::game::GameEngine<u128, BOARD_SIZE>;

#[cfg(feature = "std")]
pub use self::runtime::GameConfig;

#[cfg(feature = "std")]
mod runtime {
    use std::path::PathBuf;
    use std::string::String;
    use std::vec::Vec;

    use super::{DEFAULT_DUMP_PATH, DEFAULT_FLEET, MAX_PLACEMENT_ATTEMPTS, QUIT_TOKEN};

    /// Settings for one run of the game.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GameConfig {
        /// Fixed RNG seed; `None` draws a fresh one.
        pub seed: Option<u64>,
        /// Ship lengths, placed in this order.
        pub fleet: Vec<usize>,
        pub max_attempts: usize,
        /// Debug dump destination; `None` disables the dump.
        pub dump_path: Option<PathBuf>,
        pub quit_token: String,
    }

    impl Default for GameConfig {
        fn default() -> Self {
            Self {
                seed: None,
                fleet: DEFAULT_FLEET.to_vec(),
                max_attempts: MAX_PLACEMENT_ATTEMPTS,
                dump_path: Some(PathBuf::from(DEFAULT_DUMP_PATH)),
                quit_token: QUIT_TOKEN.into(),
            }
        }
    }
}
