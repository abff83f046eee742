//! The interactive label: pinch to scale, twist to rotate, drag with one finger.
//!
//! The host delivers touches through the four `touches_*` hooks, serially and in order. The
//! label applies the live transform while fingers move and, once fewer than two fingers remain,
//! either re-renders its text at the settled size or keeps the scale as a visual transform when
//! that size falls outside `[min_font_size, max_font_size]`.

use crate::config::LabelConfig;
use crate::error::GestureError;
use crate::geometry::{Frame, LabelPoint, LabelSize, LabelTransform, ParentPoint};
use crate::hit_test;
use crate::model::{AttributedText, TextMeasurer, Touch, TouchId};
use crate::observer::{GestureObserver, GesturePhase};
use crate::state::{CommitDecision, GestureState, TouchTracker};
use crate::util::{clog, cwarn};

pub struct PinchableLabel {
    frame: Frame,
    text: AttributedText,
    pub config: LabelConfig,
    gesture: GestureState,
    tracker: TouchTracker,
    observers: Vec<Box<dyn GestureObserver>>,
    measurer: Box<dyn TextMeasurer>,
}

impl PinchableLabel {
    /// Creates a label fitted to `text`, centered on `center`.
    pub fn new(
        text: AttributedText,
        center: ParentPoint,
        measurer: impl TextMeasurer + 'static,
    ) -> Self {
        let mut label = Self {
            frame: Frame::new(center, LabelSize::zero()),
            text,
            config: LabelConfig::default(),
            gesture: GestureState::default(),
            tracker: TouchTracker::default(),
            observers: Vec::new(),
            measurer: Box::new(measurer),
        };
        label.size_fit_to_text();
        label
    }

    pub fn with_config(mut self, config: LabelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn center(&self) -> ParentPoint {
        self.frame.center
    }

    pub fn set_center(&mut self, center: ParentPoint) {
        self.frame.center = center;
    }

    pub fn transform(&self) -> LabelTransform {
        self.frame.transform
    }

    pub fn text(&self) -> &AttributedText {
        &self.text
    }

    /// Replaces the text without refitting; call [`Self::size_fit_to_text`] afterwards.
    pub fn set_text(&mut self, text: AttributedText) {
        self.text = text;
    }

    pub fn font_size(&self) -> f64 {
        self.text.font_size()
    }

    pub fn end_scale(&self) -> f64 {
        self.gesture.end_scale
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn active_touch_count(&self) -> usize {
        self.tracker.count()
    }

    pub fn is_tracking(&self, id: TouchId) -> bool {
        self.tracker.contains(id)
    }

    pub fn unlock_all(&mut self) {
        self.config.locks.unlock_all();
    }

    pub fn add_observer(&mut self, observer: impl GestureObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn set_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Box::new(measurer);
    }

    /// A touch's location in the label's own space.
    pub fn location_in_label(&self, touch: &Touch) -> LabelPoint {
        self.frame.to_local(touch.location)
    }

    /// Resizes the bounds to the rendered text plus the configured padding.
    pub fn size_fit_to_text(&mut self) {
        let s = self.measurer.measure(&self.text);
        self.frame.size = LabelSize::new(
            s.width + self.config.adding_width,
            s.height + self.config.adding_height,
        );
    }

    /// Hit test in label space, with the tappable margin applied.
    pub fn point_inside(&self, point: LabelPoint) -> bool {
        hit_test::contains_point(
            self.frame.bounds(),
            &self.config.tappable_inset,
            self.gesture.end_scale,
            !self.tracker.is_empty(),
            point,
        )
    }

    pub fn touches_began(&mut self, touches: &[Touch]) {
        let previous = self.tracker.count();
        for t in touches {
            self.tracker.add(*t);
        }
        let font_size = self.font_size();
        self.gesture
            .begin(&self.frame, font_size, previous, self.tracker.active());
        clog(&format!(
            "label: began {} -> {} touches",
            previous,
            self.tracker.count()
        ));
        self.notify(GesturePhase::Began, touches);
    }

    pub fn touches_moved(&mut self, touches: &[Touch]) {
        let known = self.tracker.update(touches);
        if known < touches.len() {
            clog(&format!(
                "label: ignoring {} untracked moved touches",
                touches.len() - known
            ));
        }
        let solution = match self.gesture.solve_move(
            &self.config.locks,
            self.tracker.active(),
            self.frame.center,
        ) {
            Ok(s) => s,
            Err(err) => contract_violation(err),
        };
        if let Some(transform) = solution.transform {
            self.frame.transform = transform;
        }
        self.frame.center = solution.center;
        self.notify(GesturePhase::Moved, touches);
    }

    pub fn touches_ended(&mut self, touches: &[Touch]) {
        for t in touches {
            if let Err(err) = self.tracker.remove(t.id) {
                contract_violation(err);
            }
        }
        if self.tracker.count() < 2 {
            self.commit();
        }
        self.notify(GesturePhase::Ended, touches);
    }

    /// Cancellation commits whatever was live, exactly like an end.
    pub fn touches_cancelled(&mut self, touches: &[Touch]) {
        self.touches_ended(touches);
    }

    fn commit(&mut self) {
        match self.gesture.commit(&self.config) {
            CommitDecision::KeepVisualScale { font_size } => {
                clog(&format!(
                    "label: font size {:.2} out of bounds, keeping scale x{:.3}",
                    font_size, self.gesture.end_scale
                ));
            }
            CommitDecision::Rerender {
                font_size,
                transform,
            } => {
                self.frame.transform = transform;
                let current = self.text.font_size();
                if current > 0.0 {
                    self.text.apply_scale_to_font(font_size / current);
                }
                self.size_fit_to_text();
                clog(&format!("label: re-rendered at font size {:.2}", font_size));
            }
        }
        if self.tracker.count() == 1 {
            if let Some(remaining) = self.tracker.first().copied() {
                self.gesture.re_anchor(&self.frame, &remaining);
            }
        }
    }

    fn notify(&mut self, phase: GesturePhase, touches: &[Touch]) {
        let mut observers = std::mem::take(&mut self.observers);
        for o in observers.iter_mut() {
            o.on_gesture(self, phase, touches);
        }
        self.observers = observers;
    }
}

/// The host broke the touch delivery contract; there is no sane state to continue from.
fn contract_violation(err: GestureError) -> ! {
    cwarn(&format!("label: touch delivery contract violated: {}", err));
    panic!("pinchable label: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MonospaceMeasurer;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn label() -> PinchableLabel {
        PinchableLabel::new(
            AttributedText::new("Label", 30.0),
            ParentPoint::new(100.0, 100.0),
            MonospaceMeasurer::default(),
        )
    }

    #[test]
    fn new_label_is_fitted_to_its_text() {
        let l = label();
        assert!((l.frame().size.height - 36.0).abs() < 1e-9);
        assert!((l.frame().size.width - 90.0).abs() < 1e-9);
    }

    #[test]
    fn observers_see_each_phase_once_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut l = label();
        {
            let seen = seen.clone();
            l.add_observer(move |label: &PinchableLabel, phase: GesturePhase, touches: &[Touch]| {
                seen.borrow_mut()
                    .push((phase, touches.len(), label.active_touch_count()));
            });
        }
        let t = Touch::new(1, 100.0, 100.0);
        l.touches_began(&[t]);
        l.touches_moved(&[Touch::new(1, 110.0, 100.0)]);
        l.touches_cancelled(&[t]);
        assert_eq!(
            *seen.borrow(),
            vec![
                (GesturePhase::Began, 1, 1),
                (GesturePhase::Moved, 1, 1),
                (GesturePhase::Ended, 1, 0),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "never delivered")]
    fn ending_an_unknown_touch_panics() {
        let mut l = label();
        l.touches_ended(&[Touch::new(7, 0.0, 0.0)]);
    }

    #[test]
    #[should_panic(expected = "no touch is active")]
    fn moving_without_a_gesture_panics() {
        let mut l = label();
        l.touches_moved(&[Touch::new(7, 0.0, 0.0)]);
    }

    #[test]
    fn hit_test_bypasses_while_touched() {
        let mut l = label();
        let far = LabelPoint::new(-500.0, -500.0);
        assert!(!l.point_inside(far));
        l.touches_began(&[Touch::new(1, 100.0, 100.0)]);
        assert!(l.point_inside(far));
    }

    #[test]
    fn unlock_all_resets_locks() {
        let mut l = label();
        l.config.locks.scale = true;
        l.config.locks.origin_x = true;
        l.unlock_all();
        assert!(!l.config.locks.any());
    }

    #[test]
    fn padding_is_added_when_fitting() {
        let mut l = label();
        l.config.adding_width = 10.0;
        l.config.adding_height = 4.0;
        l.size_fit_to_text();
        assert!((l.frame().size.height - 40.0).abs() < 1e-9);
        assert!((l.frame().size.width - 100.0).abs() < 1e-9);
    }
}
