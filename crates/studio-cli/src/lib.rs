//! Studio CLI library.
//!
//! This crate provides the `studio` command-line front end for the
//! production calendar: it loads an item file, renders the calendar, and
//! writes rescheduled items back out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod items;

pub use error::{CliError, Result};
