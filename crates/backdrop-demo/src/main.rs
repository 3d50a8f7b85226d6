#![forbid(unsafe_code)]

//! Minimal host wiring for the backdrop panel: build a two-layer tree, open
//! the panel, then close it with a tap, logging the geometry each frame.
//!
//! Run with `RUST_LOG=debug` (or `trace`) for per-frame output.

use std::thread;
use std::time::Duration;

use backdrop_core::attrs::{AttrValue, Attrs};
use backdrop_core::event::PointerEvent;
use backdrop_core::geometry::Size;
use backdrop_core::layer::{Layer, LayerId, LayerTree};
use backdrop_core::measure::MeasureSpec;
use backdrop_core::theme::Theme;
use backdrop_widget::{
    ATTR_BACK_LAYOUT, ATTR_DURATION, ATTR_FRONT_LAYOUT, ATTR_OPEN_RADIUS, Backdrop, FrameClock,
};
use tracing_subscriber::EnvFilter;

const BACK: LayerId = LayerId::new(1);
const FRONT: LayerId = LayerId::new(2);
const FRAME: Duration = Duration::from_millis(16);

fn drain_animation(backdrop: &mut Backdrop, tree: &mut LayerTree, clock: &mut FrameClock) {
    while backdrop.is_animating() {
        thread::sleep(FRAME);
        backdrop.on_frame(tree, clock.tick());
        if let Some(front) = tree.get(FRONT) {
            tracing::info!(
                progress = backdrop.progress(),
                translate_y = front.translate_y(),
                radius = front.clip().map_or(0.0, |clip| clip.radius),
                "frame"
            );
        }
    }
    clock.reset();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut tree = LayerTree::new();
    tree.insert(Layer::new(BACK, Size::new(360, 400)));
    tree.insert(Layer::new(FRONT, Size::new(360, 800)));

    let attrs = Attrs::new()
        .with(ATTR_FRONT_LAYOUT, AttrValue::Reference(FRONT))
        .with(ATTR_BACK_LAYOUT, AttrValue::Reference(BACK))
        .with(ATTR_OPEN_RADIUS, AttrValue::Dimension(24))
        .with(ATTR_DURATION, AttrValue::Int(200));

    let mut backdrop = Backdrop::from_attrs(&attrs, &Theme::default_light());
    backdrop.attach(&mut tree);
    let size = backdrop.measure(
        &mut tree,
        MeasureSpec::exactly(360),
        MeasureSpec::exactly(800),
    );
    backdrop.place(&mut tree);
    tracing::info!(width = size.width, height = size.height, "container measured");

    let mut clock = FrameClock::new();

    // The "open" button.
    backdrop.open(&mut tree);
    drain_animation(&mut backdrop, &mut tree, &mut clock);
    tracing::info!(open = backdrop.is_open(), "reveal finished");

    // Tap the revealed panel to close it again.
    let tap = PointerEvent::down(180.0, 500.0);
    let consumed = backdrop.intercept_pointer(&mut tree, &tap);
    tracing::info!(consumed, "tap on front panel");
    drain_animation(&mut backdrop, &mut tree, &mut clock);
    tracing::info!(open = backdrop.is_open(), "collapse finished");
}
