// Active touch tracking for one label.
use crate::error::GestureError;
use crate::model::{Touch, TouchId};

/// Touches currently down on the label, in the order they began.
///
/// Only the first two take part in the gesture geometry; extra fingers are tracked so that
/// their end events balance.
#[derive(Default, Debug, Clone)]
pub struct TouchTracker {
    active: Vec<Touch>,
}

impl TouchTracker {
    pub fn add(&mut self, touch: Touch) {
        self.active.push(touch);
    }

    /// Records the latest location of touches already tracked.
    ///
    /// Returns how many of `touches` were known.
    pub fn update(&mut self, touches: &[Touch]) -> usize {
        let mut known = 0;
        for t in touches {
            if let Some(slot) = self.active.iter_mut().find(|a| a.id == t.id) {
                slot.location = t.location;
                known += 1;
            }
        }
        known
    }

    /// Removes a touch by identity, keeping the order of the others.
    pub fn remove(&mut self, id: TouchId) -> Result<Touch, GestureError> {
        let idx = self
            .active
            .iter()
            .position(|a| a.id == id)
            .ok_or(GestureError::UnknownTouch(id))?;
        Ok(self.active.remove(idx))
    }

    pub fn count(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, id: TouchId) -> bool {
        self.active.iter().any(|a| a.id == id)
    }

    pub fn first(&self) -> Option<&Touch> {
        self.active.first()
    }

    pub fn first_two(&self) -> Option<(&Touch, &Touch)> {
        match self.active.as_slice() {
            [a, b, ..] => Some((a, b)),
            _ => None,
        }
    }

    pub fn active(&self) -> &[Touch] {
        &self.active
    }
}
