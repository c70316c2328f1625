//! Axis-aligned rectangle overlap tests for the game.
//! The coordinate system is the one of the canvas:
//! * `X` points right
//! * `Y` points down
//!
//! Rectangles are never rotated or scaled, so a pair of corners is
//! all the crate needs to know about a shape.

mod aabb;

pub use aabb::*;
