//! Core data models for the pinchable label.
//! Touches as delivered by the host and the styled text the label renders.

use serde::{Deserialize, Serialize};

use crate::geometry::{LabelSize, ParentPoint};

/// Opaque identity of one finger for the duration of its touch sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchId(pub u64);

/// One finger as delivered by the host, located in the label's parent space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    pub id: TouchId,
    pub location: ParentPoint,
}

impl Touch {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id: TouchId(id),
            location: ParentPoint::new(x, y),
        }
    }
}

/// A run of text sharing one font size and letter spacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub font_size: f64,
    /// Extra advance after each character.
    pub kern: f64,
}

impl TextRun {
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_size,
            kern: 0.0,
        }
    }

    pub fn with_kern(mut self, kern: f64) -> Self {
        self.kern = kern;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributedText {
    pub runs: Vec<TextRun>,
    /// Font size reported while there are no runs.
    pub default_font_size: f64,
}

impl AttributedText {
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            runs: vec![TextRun::new(text, font_size)],
            default_font_size: font_size,
        }
    }

    pub fn from_runs(runs: Vec<TextRun>, default_font_size: f64) -> Self {
        Self {
            runs,
            default_font_size,
        }
    }

    /// The label's primary font size: the first run's.
    pub fn font_size(&self) -> f64 {
        self.runs
            .first()
            .map(|r| r.font_size)
            .unwrap_or(self.default_font_size)
    }

    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Multiplies every run's font size and kern by `ratio`.
    pub fn apply_scale_to_font(&mut self, ratio: f64) {
        for run in &mut self.runs {
            run.font_size *= ratio;
            run.kern *= ratio;
        }
        self.default_font_size *= ratio;
    }

    pub fn scaled(&self, ratio: f64) -> Self {
        let mut t = self.clone();
        t.apply_scale_to_font(ratio);
        t
    }
}

/// Font metrics provided by the host.
pub trait TextMeasurer {
    /// Rendered size of `text` at its current font sizes.
    fn measure(&self, text: &AttributedText) -> LabelSize;
}

/// Fixed advance per character, proportional to the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance: f64,
    pub line_height: f64,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &AttributedText) -> LabelSize {
        let mut width = 0.0;
        let mut height: f64 = 0.0;
        for run in &text.runs {
            let chars = run.text.chars().count() as f64;
            width += chars * (run.font_size * self.advance + run.kern);
            height = height.max(run.font_size * self.line_height);
        }
        LabelSize::new(width, height)
    }
}
