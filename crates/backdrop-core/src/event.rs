#![forbid(unsafe_code)]

//! Pointer events as delivered by the host input pipeline.

use bitflags::bitflags;

use crate::geometry::Point;

bitflags! {
    /// Keyboard modifiers held while a pointer event fired.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CONTROL = 0b0010;
        const ALT = 0b0100;
        const META = 0b1000;
    }
}

/// The phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Initial press; the only phase eligible for interception.
    Down,
    Up,
    Moved,
}

/// A single pointer event in container-local coordinates.
///
/// Positions are fractional because hosts report sub-pixel touch locations;
/// hit-testing rounds to the nearest pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::empty(),
        }
    }

    #[must_use]
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    #[must_use]
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    #[must_use]
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }

    /// The event position rounded to whole pixels.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}
