//! Ink surface state machine.

mod core;
mod pointer;
#[cfg(test)]
mod tests;

pub use core::{GestureState, InkState};
