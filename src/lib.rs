//! showcase library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod carousel;
pub mod cli;
pub mod config;
pub mod deck;
pub mod event_loop;
pub mod input;
pub mod terminal;
