//! DriveFast - Terminal Arcade Driving Game Library
//!
//! This module exposes the simulation logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod input;
pub mod rect;
pub mod sprites;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
