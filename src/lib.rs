//! # Orchard - Artificial Life Sandbox
//!
//! A simulation of simple people wandering a 2D map, spotting apples within
//! their perception radius, walking over and eating them. Each person runs a
//! small movement/eating state machine; the world drives one synchronous pass
//! over the population per tick and draws the result each frame.
//!
//! ## Features
//!
//! - Per-person movement/eating state machine with comfort-zone wandering
//! - Radius-based food perception with first-match locking
//! - Vitality decay, death, and energy recovery from eating
//! - Generational apple handles that detect stale food claims
//! - Draw-command emission decoupled from the macroquad backend
//! - Seedable RNG for reproducible runs and tests
//!
//! ## Core Modules
//!
//! - [`simulation::person`] - Person behavior, state machine, and perception
//! - [`simulation::world`] - Population controller and tick loop
//! - [`simulation::food`] - Apples and the handle-based apple store
//! - [`simulation::map`] - Map bounds and random point generation
//! - [`simulation::draw`] - Draw commands emitted for a rendering backend

/// Core simulation logic and data structures.
pub mod simulation {
    /// Draw commands and the color palette the simulation emits.
    pub mod draw;
    /// Apples and the insertion-ordered, handle-based apple store.
    pub mod food;
    /// Geometric utility functions for distance calculations.
    pub mod geometry;
    /// Map bounds and random point generation.
    pub mod map;
    /// Simulation parameters.
    pub mod params;
    /// Person behavior, state machine, and perception.
    pub mod person;
    /// World state and the per-tick population loop.
    pub mod world;
}
