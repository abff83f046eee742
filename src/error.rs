use crate::model::TouchId;

#[derive(Debug, thiserror::Error)]
pub enum GestureError {
    /// A touch ended or was cancelled without having begun on this label.
    #[error("touch {0:?} was never delivered to touches_began")]
    UnknownTouch(TouchId),
    #[error("touches_moved delivered while no touch is active")]
    NoActiveTouches,
    #[error("invalid label config: {0}")]
    Config(#[from] serde_json::Error),
}
