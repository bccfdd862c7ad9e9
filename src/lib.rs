//! Fixed-point order adjudication for a Diplomacy-family board game.
//!
//! Given a [`board::Board`] in a known [`time::Phase`] and a set of submitted
//! orders, [`dispatch`] runs the matching adjudicator — movement, retreat, or
//! build — to completion and mutates the board in place. Movement resolution
//! is the Kruijswijk guess-and-check fixed point (`judge::resolver`), backed
//! by per-order-type rules in `judge::rulebook`.
//!
//! Construction goes through `geo::builder` rather than a config-file loader;
//! `geo::fixture` provides a small hardcoded map for tests.

use std::borrow::Cow;

pub mod board;
pub mod dispatch;
pub mod error;
pub mod geo;
pub mod judge;
pub mod nation;
pub mod order;
pub mod time;
pub mod unit;

pub use error::{Error, ErrorKind, Result};

/// A short, human-oriented label for something identified elsewhere by a
/// stable key — used throughout logging and `Display` impls.
pub trait ShortName {
    fn short_name(&self) -> Cow<'_, str>;
}
