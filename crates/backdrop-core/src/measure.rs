#![forbid(unsafe_code)]

//! Per-axis measurement constraints, the protocol the host container speaks.
//!
//! A [`MeasureSpec`] travels down the tree on every measurement pass. It is
//! used in two positions:
//!
//! - [`MeasureSpec::constrain`]: a *child* resolving its own measured extent
//!   against the constraint (wrap-to-content semantics);
//! - [`MeasureSpec::resolve`]: a *container* resolving its final extent from
//!   the combined measured extent of its children.
//!
//! # Invariants
//!
//! - A spec is immutable for the duration of one measurement pass.
//! - `resolve` never returns more than the constraint size for `AtMost`.

/// How the size component of a [`MeasureSpec`] is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMode {
    /// The axis must end up exactly this large.
    Exactly,
    /// The axis may be anything up to this large.
    AtMost,
    /// No constraint; the size component carries no limit.
    Unspecified,
}

/// A single-axis layout constraint: a mode plus a pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    #[must_use]
    pub const fn new(mode: MeasureMode, size: i32) -> Self {
        Self { mode, size }
    }

    #[must_use]
    pub const fn exactly(size: i32) -> Self {
        Self::new(MeasureMode::Exactly, size)
    }

    #[must_use]
    pub const fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    #[must_use]
    pub const fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    /// Resolve a container's final extent from the measured content extent.
    ///
    /// `Exactly` and `Unspecified` take the constraint's own size; `AtMost`
    /// takes the smaller of the constraint and the content.
    #[must_use]
    pub fn resolve(self, measured: i32) -> i32 {
        match self.mode {
            MeasureMode::Exactly | MeasureMode::Unspecified => self.size,
            MeasureMode::AtMost => self.size.min(measured),
        }
    }

    /// Resolve a child's measured extent from its preferred extent.
    ///
    /// Children wrap to content: the preferred extent is clamped to the
    /// available size for `Exactly`/`AtMost` and taken as-is when the axis is
    /// `Unspecified`.
    #[must_use]
    pub fn constrain(self, preferred: i32) -> i32 {
        match self.mode {
            MeasureMode::Exactly | MeasureMode::AtMost => preferred.min(self.size),
            MeasureMode::Unspecified => preferred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_exactly_takes_spec_size() {
        assert_eq!(MeasureSpec::exactly(800).resolve(400), 800);
        assert_eq!(MeasureSpec::exactly(800).resolve(1200), 800);
    }

    #[test]
    fn resolve_at_most_takes_smaller() {
        assert_eq!(MeasureSpec::at_most(800).resolve(400), 400);
        assert_eq!(MeasureSpec::at_most(800).resolve(1200), 800);
    }

    #[test]
    fn resolve_unspecified_takes_spec_size() {
        assert_eq!(MeasureSpec::unspecified().resolve(500), 0);
        assert_eq!(MeasureSpec::new(MeasureMode::Unspecified, 64).resolve(500), 64);
    }

    #[test]
    fn constrain_clamps_to_available() {
        assert_eq!(MeasureSpec::exactly(800).constrain(400), 400);
        assert_eq!(MeasureSpec::exactly(800).constrain(1200), 800);
        assert_eq!(MeasureSpec::at_most(300).constrain(400), 300);
    }

    #[test]
    fn constrain_unspecified_keeps_preferred() {
        assert_eq!(MeasureSpec::unspecified().constrain(400), 400);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resolve_never_exceeds_an_at_most_constraint(
                size in 0i32..10_000,
                measured in 0i32..10_000,
            ) {
                prop_assert!(MeasureSpec::at_most(size).resolve(measured) <= size);
            }

            #[test]
            fn exact_resolve_ignores_measured_content(
                size in 0i32..10_000,
                measured in 0i32..10_000,
            ) {
                prop_assert_eq!(MeasureSpec::exactly(size).resolve(measured), size);
            }

            #[test]
            fn constrain_is_bounded_by_both_inputs(
                size in 0i32..10_000,
                preferred in 0i32..10_000,
            ) {
                let constrained = MeasureSpec::at_most(size).constrain(preferred);
                prop_assert!(constrained <= size);
                prop_assert!(constrained <= preferred);
            }
        }
    }
}
