use crate::label::PinchableLabel;
use crate::model::Touch;

/// Which touch hook produced a notification. Cancellation reports `Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Moved,
    Ended,
}

/// Receives gesture notifications after the label has updated itself.
pub trait GestureObserver {
    fn on_gesture(&mut self, label: &PinchableLabel, phase: GesturePhase, touches: &[Touch]);
}

impl<F> GestureObserver for F
where
    F: FnMut(&PinchableLabel, GesturePhase, &[Touch]),
{
    fn on_gesture(&mut self, label: &PinchableLabel, phase: GesturePhase, touches: &[Touch]) {
        self(label, phase, touches)
    }
}
