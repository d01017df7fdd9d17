//! Test helpers para propkit.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod command;

pub use assertions::*;
pub use command::{TestCommand, TestOutput, cli};
