//! Per-label configuration. Mutable by the host between events.

use serde::{Deserialize, Serialize};

use crate::error::GestureError;

/// Margins with UIKit semantics: positive values contract the rect, negative values expand it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            left: v,
            bottom: v,
            right: v,
        }
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::uniform(-50.0)
    }
}

/// Degrees of freedom frozen while solving a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locks {
    pub rotate: bool,
    pub scale: bool,
    pub origin_x: bool,
    pub origin_y: bool,
}

impl Locks {
    pub fn unlock_all(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.rotate || self.scale || self.origin_x || self.origin_y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Hit area margin around the bounds.
    pub tappable_inset: EdgeInsets,
    /// Above this, the scale stays visual only; large fonts are too heavy to render.
    pub max_font_size: f64,
    /// Below this, the scale stays visual only; small emoji fail to render.
    pub min_font_size: f64,
    pub locks: Locks,
    /// Padding added to the measured text size when fitting bounds.
    pub adding_width: f64,
    pub adding_height: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            tappable_inset: EdgeInsets::default(),
            max_font_size: 800.0,
            min_font_size: 22.0,
            locks: Locks::default(),
            adding_width: 0.0,
            adding_height: 0.0,
        }
    }
}

impl LabelConfig {
    /// Parses a (possibly partial) JSON document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, GestureError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, GestureError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether a font size may be rendered directly.
    pub fn accepts_font_size(&self, font_size: f64) -> bool {
        !(font_size < self.min_font_size || self.max_font_size < font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget() {
        let c = LabelConfig::default();
        assert_eq!(c.tappable_inset, EdgeInsets::uniform(-50.0));
        assert_eq!(c.max_font_size, 800.0);
        assert_eq!(c.min_font_size, 22.0);
        assert!(!c.locks.any());
        assert_eq!((c.adding_width, c.adding_height), (0.0, 0.0));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = LabelConfig::from_json(r#"{"min_font_size": 10, "locks": {"scale": true}}"#)
            .unwrap();
        assert_eq!(c.min_font_size, 10.0);
        assert_eq!(c.max_font_size, 800.0);
        assert!(c.locks.scale);
        assert!(!c.locks.rotate);
    }

    #[test]
    fn json_survives_persist_and_restore() {
        let mut c = LabelConfig::default();
        c.adding_width = 8.0;
        c.locks.origin_y = true;
        let raw = c.to_json().unwrap();
        assert_eq!(LabelConfig::from_json(&raw).unwrap(), c);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LabelConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, GestureError::Config(_)));
    }

    #[test]
    fn font_bounds_are_inclusive() {
        let c = LabelConfig::default();
        assert!(!c.accepts_font_size(21.999));
        assert!(c.accepts_font_size(22.0));
        assert!(c.accepts_font_size(800.0));
        assert!(!c.accepts_font_size(800.001));
    }

    #[test]
    fn unlock_all_clears_every_flag() {
        let mut l = Locks {
            rotate: true,
            scale: true,
            origin_x: true,
            origin_y: true,
        };
        l.unlock_all();
        assert_eq!(l, Locks::default());
    }
}
