#![forbid(unsafe_code)]

//! The retained layer tree the widget mutates.
//!
//! A [`Layer`] is the handle the host resolves a configured reference to: it
//! carries the measured extent, the placed frame, the animated vertical
//! translation, visibility, an optional background fill, and an optional
//! rounded-rect clip. The [`LayerTree`] stores layers in paint order (first
//! inserted paints first, so the back layer is inserted before the front) and
//! resolves ids to nodes.
//!
//! # Invariants
//!
//! - Paint order is insertion order and never changes; re-inserting an
//!   existing id replaces the node in place.
//! - `measured` and `frame` are only meaningful after a measure/place pass;
//!   both start at zero.
//!
//! # Failure Modes
//!
//! - `get`/`get_mut` for an unknown id return `None` (no panic); callers
//!   treat an unresolved layer as absent and skip work.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::color::Rgba;
use crate::geometry::{Point, Rect, RoundedRect, Size};
use crate::measure::MeasureSpec;

/// Identifier a host configuration uses to reference a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerId(u64);

impl LayerId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Whether a layer participates in painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// One node in the layer tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: LayerId,
    preferred: Size,
    measured: Size,
    frame: Rect,
    translate_y: f32,
    visibility: Visibility,
    background: Option<Rgba>,
    clip: Option<RoundedRect>,
    clip_to_outline: bool,
}

impl Layer {
    /// Create a layer with the given content (preferred) size.
    #[must_use]
    pub fn new(id: LayerId, preferred: Size) -> Self {
        Self {
            id,
            preferred,
            measured: Size::ZERO,
            frame: Rect::default(),
            translate_y: 0.0,
            visibility: Visibility::Visible,
            background: None,
            clip: None,
            clip_to_outline: false,
        }
    }

    /// Builder-style background fill.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Resolve this layer's measured extent against the pass constraints.
    ///
    /// Children wrap to content: each axis is the preferred extent clamped by
    /// the constraint (see [`MeasureSpec::constrain`]).
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.measured = Size::new(
            width.constrain(self.preferred.width),
            height.constrain(self.preferred.height),
        );
        self.measured
    }

    /// Place the layer's frame at `origin` with its measured extent.
    pub fn place(&mut self, origin: Point) {
        self.frame = Rect::new(origin.x, origin.y, self.measured.width, self.measured.height);
    }

    /// Current on-screen bounds: the placed frame shifted by the live
    /// vertical translation, rounded to whole pixels.
    #[must_use]
    pub fn hit_rect(&self) -> Rect {
        self.frame.translated(0, self.translate_y.round() as i32)
    }

    #[must_use]
    pub const fn id(&self) -> LayerId {
        self.id
    }

    #[must_use]
    pub const fn preferred(&self) -> Size {
        self.preferred
    }

    #[must_use]
    pub const fn measured(&self) -> Size {
        self.measured
    }

    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    #[must_use]
    pub const fn translate_y(&self) -> f32 {
        self.translate_y
    }

    pub fn set_translate_y(&mut self, translate_y: f32) {
        self.translate_y = translate_y;
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    #[must_use]
    pub const fn background_fill(&self) -> Option<Rgba> {
        self.background
    }

    pub fn set_background(&mut self, color: Rgba) {
        self.background = Some(color);
    }

    #[must_use]
    pub const fn clip(&self) -> Option<RoundedRect> {
        self.clip
    }

    pub fn set_clip(&mut self, clip: Option<RoundedRect>) {
        self.clip = clip;
    }

    #[must_use]
    pub const fn clips_to_outline(&self) -> bool {
        self.clip_to_outline
    }

    pub fn set_clip_to_outline(&mut self, clip: bool) {
        self.clip_to_outline = clip;
    }
}

/// Paint-ordered layer storage with id lookup.
#[derive(Debug, Clone, Default)]
pub struct LayerTree {
    layers: SmallVec<[Layer; 4]>,
    index: FxHashMap<LayerId, usize>,
}

impl LayerTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a layer at the top of the paint order, or replace the existing
    /// node in place when the id is already present.
    pub fn insert(&mut self, layer: Layer) -> LayerId {
        let id = layer.id();
        if let Some(&slot) = self.index.get(&id) {
            self.layers[slot] = layer;
        } else {
            self.index.insert(id, self.layers.len());
            self.layers.push(layer);
        }
        id
    }

    #[must_use]
    pub fn contains(&self, id: LayerId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.index.get(&id).map(|&slot| &self.layers[slot])
    }

    #[must_use]
    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        match self.index.get(&id) {
            Some(&slot) => self.layers.get_mut(slot),
            None => None,
        }
    }

    /// Layers in paint order (bottom first).
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Mutable iteration in paint order, for measure/place passes.
    pub fn layers_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.layers.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
