//! Draw commands emitted by the simulation for a rendering backend.
//!
//! The simulation never touches a rendering surface. Each frame it pushes
//! [`DrawCmd`]s into a caller-owned buffer; a backend (see `graphics` in the
//! binary) executes them in order. Order only affects visual layering.

use glam::Vec2;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Person body color.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    /// Target marker and pursuit line color.
    pub const BLUE: Rgba = Rgba::opaque(64, 128, 255);
    /// Apple color.
    pub const RED: Rgba = Rgba::opaque(220, 48, 48);
    /// Comfort-radius overlay fill.
    pub const TRANSLUCENT_BLUE: Rgba = Rgba::new(64, 128, 255, 28);
    /// Perception-radius overlay fill.
    pub const TRANSLUCENT_GREEN: Rgba = Rgba::new(64, 220, 96, 28);

    /// Builds a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A single drawing primitive in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    /// A straight line between two points.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke color.
        color: Rgba,
    },
    /// An axis-aligned rectangle given by two opposite corners.
    Rect {
        /// Top-left corner.
        min: Vec2,
        /// Bottom-right corner.
        max: Vec2,
        /// Fill color.
        color: Rgba,
    },
    /// A filled circle.
    Circle {
        /// Circle center.
        center: Vec2,
        /// Circle radius.
        radius: f32,
        /// Fill color.
        color: Rgba,
    },
}
