//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod dump;
pub mod locate;

pub use args::{Cli, Commands, LocateArgs};
