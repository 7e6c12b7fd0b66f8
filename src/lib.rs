//! Piston Grid - deterministic tick simulation for a grid puzzle
//!
//! A player walks an 8x8 board of boxes, goals, slide floors and pistons
//! that extend on a five-phase clock. Every command resolves into a
//! move-plan log and an energy history that a renderer can replay.

pub mod command;
pub mod core;
pub mod simulation;
pub mod world;
