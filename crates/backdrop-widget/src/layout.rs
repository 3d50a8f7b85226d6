#![forbid(unsafe_code)]

//! Overlay layout: size the container to its largest child, stack all
//! children at the same padded anchor.
//!
//! This is the measurement half of the widget, expressed as a plain value
//! consumed by the [`Backdrop`](crate::backdrop::Backdrop) controller rather
//! than inherited container behavior.
//!
//! # Invariants
//!
//! - The content size is recomputed from scratch on every measure pass;
//!   nothing carries over from a previous pass.
//! - The container sizes to the *largest* child per axis, never the sum.
//! - Placement never changes a child's measured extent.

use backdrop_core::geometry::{Insets, Point, Size};
use backdrop_core::layer::LayerTree;
use backdrop_core::measure::MeasureSpec;

/// Measure/place engine for fully overlapping children.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayLayout {
    content: Size,
}

impl OverlayLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure every layer against the same constraints and resolve the
    /// container extent per axis.
    ///
    /// `Exactly`/`Unspecified` axes take the constraint's size; `AtMost`
    /// takes the smaller of the constraint and the largest child.
    pub fn measure(&mut self, tree: &mut LayerTree, width: MeasureSpec, height: MeasureSpec) -> Size {
        let mut content = Size::ZERO;
        for layer in tree.layers_mut() {
            content = content.max(layer.measure(width, height));
        }
        self.content = content;

        Size::new(width.resolve(content.width), height.resolve(content.height))
    }

    /// Place every layer at the same top-left anchor inside the padding.
    ///
    /// Each layer keeps its own measured extent, producing the overlapping
    /// stack the reveal animation slides apart.
    pub fn place(&self, tree: &mut LayerTree, padding: Insets) {
        let anchor = Point::new(padding.left, padding.top);
        for layer in tree.layers_mut() {
            layer.place(anchor);
        }
    }

    /// Largest child extent seen by the most recent measure pass.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::geometry::Rect;
    use backdrop_core::layer::{Layer, LayerId};

    fn two_layer_tree() -> LayerTree {
        let mut tree = LayerTree::new();
        tree.insert(Layer::new(LayerId::new(1), Size::new(360, 400)));
        tree.insert(Layer::new(LayerId::new(2), Size::new(300, 800)));
        tree
    }

    #[test]
    fn container_sizes_to_largest_child_not_sum() {
        let mut tree = two_layer_tree();
        let mut layout = OverlayLayout::new();

        let size = layout.measure(
            &mut tree,
            MeasureSpec::at_most(1000),
            MeasureSpec::at_most(1000),
        );
        assert_eq!(layout.content_size(), Size::new(360, 800));
        assert_eq!(size, Size::new(360, 800));
    }

    #[test]
    fn exact_constraints_win_over_content() {
        let mut tree = two_layer_tree();
        let mut layout = OverlayLayout::new();

        let size = layout.measure(
            &mut tree,
            MeasureSpec::exactly(360),
            MeasureSpec::exactly(640),
        );
        assert_eq!(size, Size::new(360, 640));
    }

    #[test]
    fn at_most_clamps_to_constraint() {
        let mut tree = two_layer_tree();
        let mut layout = OverlayLayout::new();

        let size = layout.measure(
            &mut tree,
            MeasureSpec::at_most(200),
            MeasureSpec::at_most(500),
        );
        assert_eq!(size, Size::new(200, 500));
    }

    #[test]
    fn content_size_is_recomputed_each_pass() {
        let mut tree = two_layer_tree();
        let mut layout = OverlayLayout::new();

        layout.measure(
            &mut tree,
            MeasureSpec::at_most(1000),
            MeasureSpec::at_most(1000),
        );
        assert_eq!(layout.content_size(), Size::new(360, 800));

        // A tighter second pass must not inherit the first pass's maxima.
        layout.measure(&mut tree, MeasureSpec::at_most(120), MeasureSpec::at_most(90));
        assert_eq!(layout.content_size(), Size::new(120, 90));
    }

    #[test]
    fn place_anchors_all_children_at_padding() {
        let mut tree = two_layer_tree();
        let mut layout = OverlayLayout::new();
        layout.measure(
            &mut tree,
            MeasureSpec::exactly(360),
            MeasureSpec::exactly(800),
        );
        layout.place(&mut tree, Insets::new(8, 16, 8, 0));

        let back = tree.get(LayerId::new(1)).unwrap();
        let front = tree.get(LayerId::new(2)).unwrap();
        assert_eq!(back.frame(), Rect::new(8, 16, 360, 400));
        assert_eq!(front.frame(), Rect::new(8, 16, 300, 800));
    }

    #[test]
    fn empty_tree_measures_to_constraint_defaults() {
        let mut tree = LayerTree::new();
        let mut layout = OverlayLayout::new();

        let size = layout.measure(
            &mut tree,
            MeasureSpec::exactly(100),
            MeasureSpec::at_most(100),
        );
        assert_eq!(size, Size::new(100, 0));
    }
}
