// Allow some clippy lints project-wide for code style consistency
#![allow(clippy::uninlined_format_args)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pager;

pub use pager::{Link, LinkKind, Pager, PagerError};
