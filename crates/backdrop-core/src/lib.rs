#![forbid(unsafe_code)]

//! Host-facing primitives for the Backdrop reveal panel.
//!
//! This crate provides:
//! - [`geometry`] for integer pixel geometry ([`Point`], [`Size`], [`Rect`],
//!   [`Insets`], [`RoundedRect`])
//! - [`measure`] for the per-axis mode+size constraint protocol
//! - [`event`] for pointer events and modifier flags
//! - [`color`] and [`theme`] for packed RGBA and host theme defaults
//! - [`attrs`] for opaque construction-time attribute storage
//! - [`layer`] for the retained layer tree the widget mutates

pub mod attrs;
pub mod color;
pub mod event;
pub mod geometry;
pub mod layer;
pub mod measure;
pub mod theme;

pub use attrs::{AttrValue, Attrs};
pub use color::Rgba;
pub use event::{Modifiers, PointerEvent, PointerEventKind};
pub use geometry::{Insets, Point, Rect, RoundedRect, Size};
pub use layer::{Layer, LayerId, LayerTree, Visibility};
pub use measure::{MeasureMode, MeasureSpec};
pub use theme::Theme;
