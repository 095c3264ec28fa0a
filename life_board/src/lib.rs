//! Bit-packed board engine for Conway's Game of Life.
//!
//! One bit per cell, two fixed buffers stepped in a ping-pong fashion, and a
//! fixed-point signal when a generation changes nothing. Rendering and any
//! other front-end lives outside this crate; callers drive [`Board`] and read
//! its raw bytes through [`Board::cells`].

pub mod board;
pub mod patterns;

pub use board::{BUFFER_LEN, Board, BoardError, DIM, GRID_END, GRID_START, StepResult, TOTAL_SIZE};
pub use patterns::{PATTERNS, Pattern, apply_pattern, apply_random};
