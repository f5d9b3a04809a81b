//! A console hold-or-draw blackjack game with an optional `no_std` engine.
//!
//! The crate provides a [`Session`] type that deals a running hand to a single
//! player, settles holds against a random dealer total, and keeps win, loss
//! and tie counts across rounds. With the `std` feature the [`console`]
//! module drives a session from any line-based input.
//!
//! # Example
//!
//! ```
//! use bjhold::{Card, HandStatus, Session, TableOptions};
//!
//! let mut session = Session::new(TableOptions::default(), 42).unwrap();
//! let draw = session.take_card(Card::new(13)).unwrap();
//! assert_eq!(draw.total, 10);
//! assert_eq!(draw.status, HandStatus::Active);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
pub mod console;
pub mod error;
pub mod game;
pub mod hand;
pub mod menu;
pub mod options;
pub mod result;
pub mod stats;

// Re-export main types
pub use card::{Card, MAX_RANK, MIN_RANK};
#[cfg(feature = "std")]
pub use console::Console;
#[cfg(feature = "std")]
pub use error::PlayError;
pub use error::{ActionError, MenuError, OptionsError};
pub use game::{Phase, Session};
pub use hand::{Hand, HandStatus};
pub use menu::MenuOption;
pub use options::TableOptions;
pub use result::{Draw, Resolution, RoundOutcome, Showdown};
pub use stats::Stats;
