//! A text label that can be pinched to scale, rotated with two fingers and dragged with one,
//! re-rendering its font at the settled size when the gesture ends.

pub mod config;
pub mod error;
pub mod geometry;
pub mod label;
pub mod model;
pub mod observer;
pub mod state;
pub mod util;

pub use config::{EdgeInsets, LabelConfig, Locks};
pub use error::GestureError;
pub use geometry::{Frame, LabelPoint, LabelPx, LabelSize, ParentPoint, ParentPx};
pub use label::PinchableLabel;
pub use model::{AttributedText, MonospaceMeasurer, TextMeasurer, TextRun, Touch, TouchId};
pub use observer::{GestureObserver, GesturePhase};
