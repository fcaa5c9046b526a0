//! CLI surface: argument tree and identifier newtypes.

pub mod args;
pub mod types;

pub use args::{Commands, CommonOpts, Harvest};
pub use types::{HeroId, MatchId};
