#![forbid(unsafe_code)]

//! Construction-time attribute storage.
//!
//! The host hands the widget an opaque key→value map once, at construction.
//! Lookups are typed: asking for a key that is absent, or present with a
//! different value type, yields `None` and the caller falls back to its
//! default. There is no error channel; misconfiguration degrades, it does
//! not fail.

use rustc_hash::FxHashMap;

use crate::color::Rgba;
use crate::layer::LayerId;

/// A single typed attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrValue {
    /// A pixel dimension.
    Dimension(i32),
    /// A plain integer (durations, counts).
    Int(i64),
    /// A reference to another layer in the tree.
    Reference(LayerId),
    /// A color fill.
    Color(Rgba),
}

/// Opaque key→value attribute storage supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    values: FxHashMap<&'static str, AttrValue>,
}

impl Attrs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: AttrValue) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn set(&mut self, key: &'static str, value: AttrValue) {
        self.values.insert(key, value);
    }

    #[must_use]
    pub fn dimension(&self, key: &str) -> Option<i32> {
        match self.values.get(key) {
            Some(AttrValue::Dimension(px)) => Some(*px),
            _ => None,
        }
    }

    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(AttrValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn reference(&self, key: &str) -> Option<LayerId> {
        match self.values.get(key) {
            Some(AttrValue::Reference(id)) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn color(&self, key: &str) -> Option<Rgba> {
        match self.values.get(key) {
            Some(AttrValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_lookup_hits() {
        let attrs = Attrs::new()
            .with("openRadius", AttrValue::Dimension(20))
            .with("duration", AttrValue::Int(200))
            .with("frontLayout", AttrValue::Reference(LayerId::new(7)))
            .with("background", AttrValue::Color(Rgba::WHITE));

        assert_eq!(attrs.dimension("openRadius"), Some(20));
        assert_eq!(attrs.int("duration"), Some(200));
        assert_eq!(attrs.reference("frontLayout"), Some(LayerId::new(7)));
        assert_eq!(attrs.color("background"), Some(Rgba::WHITE));
    }

    #[test]
    fn missing_key_is_none() {
        let attrs = Attrs::new();
        assert_eq!(attrs.dimension("openRadius"), None);
        assert!(attrs.is_empty());
    }

    #[test]
    fn type_mismatch_is_none() {
        let attrs = Attrs::new().with("openRadius", AttrValue::Int(20));
        assert_eq!(attrs.dimension("openRadius"), None);
        assert_eq!(attrs.int("openRadius"), Some(20));
    }

    #[test]
    fn set_overwrites() {
        let mut attrs = Attrs::new().with("duration", AttrValue::Int(200));
        attrs.set("duration", AttrValue::Int(350));
        assert_eq!(attrs.int("duration"), Some(350));
        assert_eq!(attrs.len(), 1);
    }
}
