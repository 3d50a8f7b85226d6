#![forbid(unsafe_code)]

//! The backdrop reveal panel controller.
//!
//! Two fully overlapping layers: a back layer that is revealed and a front
//! panel that slides down over it with an animated rounded-corner mask.
//! `open()` plays the reveal forward, `close()` plays it in reverse, and a
//! press on the open front panel closes it again.
//!
//! # Invariants
//!
//! - `is_open() == true` implies an opening (or completed-open) transition
//!   was requested more recently than any closing one, and vice versa.
//! - At most one progress driver exists; a new direction retargets the live
//!   run instead of starting a second one.
//! - The back layer is visible for the whole of both transitions and hidden
//!   only after a completed close.
//!
//! # Failure Modes
//!
//! - Unresolved layer references leave `open()`/`close()`/ticks as silent
//!   no-ops; a missing back layer contributes zero height instead of
//!   failing. Misconfiguration degrades to "panel never opens".

use std::time::Duration;

use backdrop_core::attrs::Attrs;
use backdrop_core::color::Rgba;
use backdrop_core::event::{PointerEvent, PointerEventKind};
use backdrop_core::geometry::{Insets, RoundedRect, Size};
use backdrop_core::layer::{LayerId, LayerTree, Visibility};
use backdrop_core::measure::MeasureSpec;
use backdrop_core::theme::Theme;

use crate::animation::ProgressDriver;
use crate::layout::OverlayLayout;
use crate::outline::reveal_mask;

/// Attribute key for the front panel reference.
pub const ATTR_FRONT_LAYOUT: &str = "frontLayout";
/// Attribute key for the back layer reference.
pub const ATTR_BACK_LAYOUT: &str = "backLayout";
/// Attribute key for the fully-open corner radius, in pixels.
pub const ATTR_OPEN_RADIUS: &str = "openRadius";
/// Attribute key for the minimum visible front-panel strip, in pixels.
pub const ATTR_FRONT_LAYOUT_MIN_HEIGHT: &str = "frontLayoutMinHeight";
/// Attribute key for the transition duration, in milliseconds.
pub const ATTR_DURATION: &str = "duration";
/// Attribute key for the container background fill.
pub const ATTR_BACKGROUND: &str = "background";

/// Construction-time configuration, immutable after the widget is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropConfig {
    pub front_layer: Option<LayerId>,
    pub back_layer: Option<LayerId>,
    pub open_radius: i32,
    pub min_front_height: i32,
    pub duration: Duration,
    pub background: Rgba,
}

impl BackdropConfig {
    #[must_use]
    pub fn new(front_layer: LayerId, back_layer: LayerId) -> Self {
        let theme = Theme::default_light();
        Self {
            front_layer: Some(front_layer),
            back_layer: Some(back_layer),
            open_radius: 0,
            min_front_height: theme.toolbar_height,
            duration: ProgressDriver::DEFAULT_DURATION,
            background: theme.primary,
        }
    }

    /// Read the configuration once from attribute storage, falling back to
    /// theme defaults for anything the host left out.
    #[must_use]
    pub fn from_attrs(attrs: &Attrs, theme: &Theme) -> Self {
        let duration_ms = attrs
            .int(ATTR_DURATION)
            .filter(|&ms| ms > 0)
            .unwrap_or(ProgressDriver::DEFAULT_DURATION.as_millis() as i64);
        Self {
            front_layer: attrs.reference(ATTR_FRONT_LAYOUT),
            back_layer: attrs.reference(ATTR_BACK_LAYOUT),
            open_radius: attrs.dimension(ATTR_OPEN_RADIUS).unwrap_or(0),
            min_front_height: attrs
                .dimension(ATTR_FRONT_LAYOUT_MIN_HEIGHT)
                .unwrap_or(theme.toolbar_height),
            duration: Duration::from_millis(duration_ms as u64),
            background: attrs.color(ATTR_BACKGROUND).unwrap_or(theme.primary),
        }
    }

    #[must_use]
    pub fn open_radius(mut self, radius: i32) -> Self {
        self.open_radius = radius;
        self
    }

    #[must_use]
    pub fn min_front_height(mut self, height: i32) -> Self {
        self.min_front_height = height;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }
}

/// Geometry derived for one animation frame: the front panel's vertical
/// offset and its clip mask. Recomputed per frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub translate_y: f32,
    pub mask: RoundedRect,
}

/// The backdrop panel widget: state machine, layout, and animation wiring.
#[derive(Debug, Clone)]
pub struct Backdrop {
    config: BackdropConfig,
    padding: Insets,
    layout: OverlayLayout,
    driver: ProgressDriver,
    front: Option<LayerId>,
    back: Option<LayerId>,
    measured: Size,
    is_open: bool,
}

impl Backdrop {
    #[must_use]
    pub fn new(config: BackdropConfig) -> Self {
        Self {
            driver: ProgressDriver::new(config.duration),
            config,
            padding: Insets::default(),
            layout: OverlayLayout::new(),
            front: None,
            back: None,
            measured: Size::ZERO,
            is_open: false,
        }
    }

    /// Construct from attribute storage and theme defaults.
    #[must_use]
    pub fn from_attrs(attrs: &Attrs, theme: &Theme) -> Self {
        Self::new(BackdropConfig::from_attrs(attrs, theme))
    }

    /// Builder-style container padding.
    #[must_use]
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Resolve the configured layer references against the tree.
    ///
    /// The back layer starts hidden; the front panel gets a white background
    /// when it has none and is switched to clip against its outline. A
    /// reference the tree cannot resolve stays `None` and the widget stays
    /// inert.
    pub fn attach(&mut self, tree: &mut LayerTree) {
        self.back = self.config.back_layer.filter(|&id| tree.contains(id));
        if let Some(id) = self.back
            && let Some(back) = tree.get_mut(id)
        {
            back.set_visibility(Visibility::Hidden);
        }

        self.front = self.config.front_layer.filter(|&id| tree.contains(id));
        if let Some(id) = self.front
            && let Some(front) = tree.get_mut(id)
        {
            if front.background_fill().is_none() {
                front.set_background(Rgba::WHITE);
            }
            front.set_clip_to_outline(true);
        } else {
            tracing::debug!("front layer reference unresolved; backdrop stays inert");
        }
    }

    /// Measure every layer and resolve the container extent.
    pub fn measure(&mut self, tree: &mut LayerTree, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.measured = self.layout.measure(tree, width, height);
        self.measured
    }

    /// Place every layer at the padded anchor with its measured extent.
    pub fn place(&mut self, tree: &mut LayerTree) {
        self.layout.place(tree, self.padding);
    }

    /// Start the opening transition. No-op while already open or before the
    /// front panel reference resolves.
    pub fn open(&mut self, tree: &mut LayerTree) {
        if self.front.is_none() || self.is_open {
            return;
        }
        self.is_open = true;
        self.driver.forward();
        self.show_back(tree);
        tracing::debug!(duration_ms = self.config.duration.as_millis() as u64, "opening backdrop");
    }

    /// Start the closing transition. No-op while already closed or before
    /// the front panel reference resolves.
    pub fn close(&mut self, tree: &mut LayerTree) {
        if self.front.is_none() || !self.is_open {
            return;
        }
        self.is_open = false;
        self.driver.reverse();
        self.show_back(tree);
        tracing::debug!(duration_ms = self.config.duration.as_millis() as u64, "closing backdrop");
    }

    // The back layer must be watched appearing and disappearing, so it is
    // shown at the start of both transitions and resolved again at the end.
    fn show_back(&self, tree: &mut LayerTree) {
        if let Some(id) = self.back
            && let Some(back) = tree.get_mut(id)
        {
            back.set_visibility(Visibility::Visible);
        }
    }

    /// Advance the live transition by `dt` and apply the derived frame.
    ///
    /// Idle (no live transition) this does nothing. On completion the back
    /// layer's visibility is resolved against the *current* target state, so
    /// a superseded transition settles on the latest requested state.
    pub fn on_frame(&mut self, tree: &mut LayerTree, dt: Duration) {
        let Some(tick) = self.driver.advance(dt) else {
            return;
        };

        self.apply_frame(tree, tick.fraction);

        if tick.finished {
            let visibility = if self.is_open {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            if let Some(id) = self.back
                && let Some(back) = tree.get_mut(id)
            {
                back.set_visibility(visibility);
            }
            tracing::debug!(open = self.is_open, "backdrop transition finished");
        }
    }

    /// Derive the front panel's offset and mask for `fraction`.
    ///
    /// The offset target is the back layer's measured height below the top
    /// padding, capped so at least `min_front_height` of the panel stays on
    /// screen. A missing back layer contributes zero height.
    #[must_use]
    pub fn reveal_frame(&self, tree: &LayerTree, fraction: f32) -> RevealFrame {
        let back_height = self
            .back
            .and_then(|id| tree.get(id))
            .map_or(0, |back| back.measured().height);
        let target_y = back_height + self.padding.top;
        let max_y = self.measured.height - self.config.min_front_height;
        let translate_y = target_y.min(max_y) as f32 * fraction;

        let front_size = self
            .front
            .and_then(|id| tree.get(id))
            .map_or(Size::ZERO, |front| front.measured());

        RevealFrame {
            translate_y,
            mask: reveal_mask(front_size, self.config.open_radius, fraction),
        }
    }

    fn apply_frame(&mut self, tree: &mut LayerTree, fraction: f32) {
        let Some(front_id) = self.front else {
            return;
        };
        let frame = self.reveal_frame(tree, fraction);
        if let Some(front) = tree.get_mut(front_id) {
            front.set_translate_y(frame.translate_y);
            front.set_clip(Some(frame.mask));
        }
        tracing::trace!(fraction, translate_y = frame.translate_y, "applied reveal frame");
    }

    /// Intercept a pointer event while open.
    ///
    /// A press inside the front panel's current on-screen bounds is consumed
    /// and closes the panel; everything else passes through unconsumed.
    pub fn intercept_pointer(&mut self, tree: &mut LayerTree, event: &PointerEvent) -> bool {
        if !self.is_open || event.kind != PointerEventKind::Down {
            return false;
        }
        let Some(hit_rect) = self.front.and_then(|id| tree.get(id)).map(|front| front.hit_rect())
        else {
            return false;
        };
        if hit_rect.contains(event.position()) {
            self.close(tree);
            return true;
        }
        false
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether a transition is currently in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Absolute animation progress in `[0, 1]`.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.driver.progress()
    }

    /// Container extent from the most recent measure pass.
    #[must_use]
    pub const fn measured_size(&self) -> Size {
        self.measured
    }

    /// The container's own background fill.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.config.background
    }

    #[must_use]
    pub const fn config(&self) -> &BackdropConfig {
        &self.config
    }
}
