#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod command;
mod common;
mod config;
#[cfg(feature = "std")]
mod dump;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod session;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use command::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use dump::write_board_dump;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use session::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
