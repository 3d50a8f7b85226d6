#![forbid(unsafe_code)]

//! Backdrop reveal panel for layer-tree hosts.
//!
//! A back layer is revealed behind a front panel that slides down over it
//! with an animated rounded-corner mask. The crate is pure state: the host
//! owns the event loop and the frame scheduler and calls into
//! [`Backdrop`] for measurement, placement, transitions, per-frame
//! advancement, and pointer interception.
//!
//! ```
//! use std::time::Duration;
//!
//! use backdrop_core::geometry::Size;
//! use backdrop_core::layer::{Layer, LayerId, LayerTree};
//! use backdrop_core::measure::MeasureSpec;
//! use backdrop_widget::{Backdrop, BackdropConfig};
//!
//! const BACK: LayerId = LayerId::new(1);
//! const FRONT: LayerId = LayerId::new(2);
//!
//! let mut tree = LayerTree::new();
//! tree.insert(Layer::new(BACK, Size::new(360, 400)));
//! tree.insert(Layer::new(FRONT, Size::new(360, 800)));
//!
//! let mut backdrop = Backdrop::new(BackdropConfig::new(FRONT, BACK).open_radius(20));
//! backdrop.attach(&mut tree);
//! backdrop.measure(&mut tree, MeasureSpec::exactly(360), MeasureSpec::exactly(800));
//! backdrop.place(&mut tree);
//!
//! backdrop.open(&mut tree);
//! while backdrop.is_animating() {
//!     backdrop.on_frame(&mut tree, Duration::from_millis(16));
//! }
//! assert_eq!(tree.get(FRONT).unwrap().translate_y(), 400.0);
//! ```

pub mod animation;
pub mod backdrop;
pub mod layout;
pub mod outline;

pub use animation::{Direction, FrameClock, ProgressDriver, Tick};
pub use backdrop::{
    ATTR_BACK_LAYOUT, ATTR_BACKGROUND, ATTR_DURATION, ATTR_FRONT_LAYOUT,
    ATTR_FRONT_LAYOUT_MIN_HEIGHT, ATTR_OPEN_RADIUS, Backdrop, BackdropConfig, RevealFrame,
};
pub use layout::OverlayLayout;
pub use outline::reveal_mask;
