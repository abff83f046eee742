//! Gesture snapshot and transform state for one label.
//!
//! `begin` re-anchors on every touch-began, `solve_move` turns the first two active touches into
//! a transform and a center, and `commit` decides whether the accumulated scale is baked into
//! the font once fewer than two touches remain.

use euclid::Transform2D;

use crate::config::{LabelConfig, Locks};
use crate::error::GestureError;
use crate::geometry::{
    self, Frame, LabelSize, LabelTransform, ParentPoint, ParentVector, RotateTransform,
};
use crate::model::Touch;

#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    pub begin_size: LabelSize,
    pub begin_font_size: f64,
    /// Offset of the anchor (single finger, or midpoint of two) from the label center.
    pub begin_center: ParentVector,
    pub begin_distance: f64,
    pub begin_radian: f64,
    pub begin_transform: LabelTransform,
    pub last_rotate_transform: RotateTransform,
    pub last_scale: f64,
    pub end_rotate_transform: LabelTransform,
    /// Scale applied visually but not yet baked into the font; 1 after a re-render.
    pub end_scale: f64,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            begin_size: LabelSize::zero(),
            begin_font_size: 0.0,
            begin_center: ParentVector::zero(),
            begin_distance: 0.0,
            begin_radian: 0.0,
            begin_transform: Transform2D::identity(),
            last_rotate_transform: Transform2D::identity(),
            last_scale: 1.0,
            end_rotate_transform: Transform2D::identity(),
            end_scale: 1.0,
        }
    }
}

/// Result of one move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSolution {
    /// New label transform; `None` for a single-finger drag.
    pub transform: Option<LabelTransform>,
    pub center: ParentPoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitDecision {
    /// Font size out of bounds: the scale stays a visual transform.
    KeepVisualScale { font_size: f64 },
    /// Bake the scale into the font and reset the transform to rotation only.
    Rerender {
        font_size: f64,
        transform: LabelTransform,
    },
}

impl GestureState {
    /// Snapshots the label at touch-began.
    ///
    /// `previous_count` is the number of touches active before this event's touches were added;
    /// `active` already contains them. The two-finger anchor is only taken when the count
    /// crosses from below two.
    pub fn begin(&mut self, frame: &Frame, font_size: f64, previous_count: usize, active: &[Touch]) {
        self.begin_size = frame.size;
        self.begin_font_size = font_size;
        self.begin_transform = self.end_rotate_transform;
        self.last_rotate_transform = Transform2D::identity();
        self.last_scale = self.end_scale;

        match active {
            [only] => self.re_anchor(frame, only),
            [a, b, ..] if previous_count < 2 => {
                let l0 = frame.offset_from_center(frame.to_local(a.location));
                let l1 = frame.offset_from_center(frame.to_local(b.location));
                let (distance, radian, center) =
                    geometry::distance_radian_and_center(l0.to_point(), l1.to_point());
                self.begin_distance = distance;
                self.begin_radian = radian;
                self.begin_center = center.to_vector();
            }
            _ => {}
        }
    }

    /// Re-anchors a single-finger drag on `touch` against the label as it is now.
    pub fn re_anchor(&mut self, frame: &Frame, touch: &Touch) {
        self.begin_center = frame.offset_from_center(frame.to_local(touch.location));
    }

    /// Solves a move for the active touches, read in parent space.
    ///
    /// Locked origin axes keep the value from `current_center`.
    pub fn solve_move(
        &mut self,
        locks: &Locks,
        active: &[Touch],
        current_center: ParentPoint,
    ) -> Result<MoveSolution, GestureError> {
        let mut transform = None;
        let c = match active {
            [] => return Err(GestureError::NoActiveTouches),
            [only] => only.location - self.begin_center,
            [a, b, ..] => {
                let (distance, radian, location) =
                    geometry::distance_radian_and_center(a.location, b.location);
                // Two fingers that began on the same point have no reference distance.
                let scale = if locks.scale || self.begin_distance <= f64::EPSILON {
                    1.0
                } else {
                    distance / self.begin_distance
                };
                let rotate = if locks.rotate {
                    0.0
                } else {
                    self.begin_radian - radian
                };
                let from_center = self.begin_center * scale;

                self.last_scale = scale * self.end_scale;
                self.last_rotate_transform = geometry::rotation(rotate);
                let scaled: RotateTransform = Transform2D::scale(self.last_scale, self.last_scale);
                transform = Some(
                    self.begin_transform
                        .then(&scaled.then(&self.last_rotate_transform)),
                );
                location - self.last_rotate_transform.transform_vector(from_center)
            }
        };

        let mut center = current_center;
        if !locks.origin_x {
            center.x = c.x;
        }
        if !locks.origin_y {
            center.y = c.y;
        }
        Ok(MoveSolution { transform, center })
    }

    /// Settles the gesture once fewer than two touches remain.
    pub fn commit(&mut self, config: &LabelConfig) -> CommitDecision {
        self.end_rotate_transform = self.begin_transform.then(&self.last_rotate_transform);
        let font_size = self.begin_font_size * self.last_scale;
        if config.accepts_font_size(font_size) {
            self.end_scale = 1.0;
            CommitDecision::Rerender {
                font_size,
                transform: self.end_rotate_transform,
            }
        } else {
            self.end_scale = self.last_scale;
            CommitDecision::KeepVisualScale { font_size }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{assert_close, LabelPoint};
    use proptest::prelude::*;

    // Placed so that local and parent coordinates coincide.
    fn frame() -> Frame {
        Frame::new(ParentPoint::new(30.0, 12.0), LabelSize::new(60.0, 24.0))
    }

    fn two_finger_begin(state: &mut GestureState, a: Touch, b: Touch) {
        let f = frame();
        state.begin(&f, 20.0, 0, &[a]);
        state.begin(&f, 20.0, 1, &[a, b]);
    }

    #[test]
    fn single_touch_anchor_is_offset_from_center() {
        let mut s = GestureState::default();
        s.begin(&frame(), 20.0, 0, &[Touch::new(1, 10.0, 2.0)]);
        assert_eq!(s.begin_center, ParentVector::new(-20.0, -10.0));
        assert_eq!(s.begin_font_size, 20.0);
        assert_eq!(s.begin_size, LabelSize::new(60.0, 24.0));
    }

    #[test]
    fn second_finger_records_distance_and_angle() {
        let mut s = GestureState::default();
        two_finger_begin(&mut s, Touch::new(1, 0.0, 0.0), Touch::new(2, 100.0, 0.0));
        assert_close(s.begin_distance, 100.0);
        assert_close(s.begin_radian, -std::f64::consts::FRAC_PI_2);
        assert_eq!(s.begin_center, ParentVector::new(20.0, -12.0));
    }

    #[test]
    fn third_finger_keeps_two_finger_anchor() {
        let mut s = GestureState::default();
        let a = Touch::new(1, 0.0, 0.0);
        let b = Touch::new(2, 100.0, 0.0);
        two_finger_begin(&mut s, a, b);
        s.last_scale = 3.0;
        s.begin(&frame(), 20.0, 2, &[a, b, Touch::new(3, 50.0, 50.0)]);
        assert_close(s.begin_distance, 100.0);
        assert_eq!(s.begin_center, ParentVector::new(20.0, -12.0));
        assert_eq!(s.last_scale, s.end_scale);
    }

    #[test]
    fn pinch_out_doubles_scale() {
        let mut s = GestureState::default();
        two_finger_begin(&mut s, Touch::new(1, 0.0, 0.0), Touch::new(2, 100.0, 0.0));
        let sol = s
            .solve_move(
                &Locks::default(),
                &[Touch::new(1, 0.0, 0.0), Touch::new(2, 200.0, 0.0)],
                frame().center,
            )
            .unwrap();
        assert_close(s.last_scale, 2.0);
        let t = sol.transform.unwrap();
        assert_close(t.m11, 2.0);
        assert_close(t.m12, 0.0);
        assert_close(sol.center.x, 60.0);
        assert_close(sol.center.y, 24.0);
    }

    #[test]
    fn pinch_keeps_fingers_on_the_same_label_points() {
        let mut s = GestureState::default();
        let f = frame();
        two_finger_begin(&mut s, Touch::new(1, 10.0, 10.0), Touch::new(2, 50.0, 20.0));
        let moved = [Touch::new(1, 0.0, 30.0), Touch::new(2, 70.0, -5.0)];
        let sol = s.solve_move(&Locks::default(), &moved, f.center).unwrap();
        let after = Frame {
            center: sol.center,
            size: f.size,
            transform: sol.transform.unwrap(),
        };
        let p = after.to_parent(LabelPoint::new(30.0, 15.0));
        // midpoint of the fingers stays on the label point it began on
        assert_close(p.x, 35.0);
        assert_close(p.y, 12.5);
    }

    #[test]
    fn coincident_begin_touches_do_not_scale() {
        let mut s = GestureState::default();
        two_finger_begin(&mut s, Touch::new(1, 5.0, 5.0), Touch::new(2, 5.0, 5.0));
        assert_eq!(s.begin_distance, 0.0);
        let sol = s
            .solve_move(
                &Locks::default(),
                &[Touch::new(1, 0.0, 5.0), Touch::new(2, 40.0, 5.0)],
                frame().center,
            )
            .unwrap();
        assert_eq!(s.last_scale, 1.0);
        assert!(sol.transform.unwrap().m11.is_finite());
    }

    #[test]
    fn moving_without_touches_is_an_error() {
        let mut s = GestureState::default();
        let err = s.solve_move(&Locks::default(), &[], frame().center).unwrap_err();
        assert!(matches!(err, GestureError::NoActiveTouches));
    }

    #[test]
    fn rotation_lock_keeps_rotation_identity() {
        let mut s = GestureState::default();
        two_finger_begin(&mut s, Touch::new(1, 0.0, 0.0), Touch::new(2, 100.0, 0.0));
        let locks = Locks {
            rotate: true,
            ..Locks::default()
        };
        s.solve_move(&locks, &[Touch::new(1, 0.0, 0.0), Touch::new(2, 0.0, 100.0)], frame().center)
            .unwrap();
        assert_eq!(s.last_rotate_transform, Transform2D::identity());
    }

    #[test]
    fn commit_bounds_are_inclusive() {
        let config = LabelConfig::default();
        let cases = [
            (21.999, false),
            (22.0, true),
            (800.0, true),
            (800.001, false),
        ];
        for (font_size, rerender) in cases {
            let mut s = GestureState::default();
            s.begin_font_size = font_size;
            s.last_scale = 1.0;
            let decision = s.commit(&config);
            assert_eq!(
                matches!(decision, CommitDecision::Rerender { .. }),
                rerender,
                "font size {}",
                font_size
            );
            assert_eq!(s.end_scale, 1.0);
        }
    }

    #[test]
    fn out_of_bounds_commit_keeps_scale_visual() {
        let mut s = GestureState::default();
        s.begin_font_size = 20.0;
        s.last_scale = 0.5;
        s.last_rotate_transform = geometry::rotation(0.25);
        let decision = s.commit(&LabelConfig::default());
        assert_eq!(decision, CommitDecision::KeepVisualScale { font_size: 10.0 });
        assert_eq!(s.end_scale, 0.5);
        assert_close(s.end_rotate_transform.m12, 0.25f64.sin());
    }

    #[test]
    fn in_bounds_commit_resets_end_scale() {
        let mut s = GestureState::default();
        s.begin_font_size = 20.0;
        s.last_scale = 2.0;
        s.end_scale = 0.9;
        match s.commit(&LabelConfig::default()) {
            CommitDecision::Rerender { font_size, transform } => {
                assert_eq!(font_size, 40.0);
                assert_eq!(transform, Transform2D::identity());
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(s.end_scale, 1.0);
    }

    proptest! {
        #[test]
        fn drag_is_pure_translation(
            bx in -200.0f64..200.0, by in -200.0f64..200.0,
            px in -500.0f64..500.0, py in -500.0f64..500.0,
            lock_x in any::<bool>(), lock_y in any::<bool>(),
        ) {
            let f = frame();
            let mut s = GestureState::default();
            s.begin(&f, 20.0, 0, &[Touch::new(1, bx, by)]);
            let locks = Locks { origin_x: lock_x, origin_y: lock_y, ..Locks::default() };
            let sol = s.solve_move(&locks, &[Touch::new(1, px, py)], f.center).unwrap();
            prop_assert!(sol.transform.is_none());
            if lock_x {
                prop_assert_eq!(sol.center.x.to_bits(), f.center.x.to_bits());
            } else {
                prop_assert!((sol.center.x - (f.center.x + px - bx)).abs() < 1e-9);
            }
            if lock_y {
                prop_assert_eq!(sol.center.y.to_bits(), f.center.y.to_bits());
            } else {
                prop_assert!((sol.center.y - (f.center.y + py - by)).abs() < 1e-9);
            }
        }

        #[test]
        fn scale_lock_keeps_previous_end_scale(
            end_scale in 0.25f64..4.0,
            x1 in 10.0f64..300.0, y1 in -300.0f64..300.0,
        ) {
            let mut s = GestureState { end_scale, ..GestureState::default() };
            two_finger_begin(&mut s, Touch::new(1, 0.0, 0.0), Touch::new(2, 100.0, 0.0));
            let locks = Locks { scale: true, ..Locks::default() };
            s.solve_move(&locks, &[Touch::new(1, 0.0, 0.0), Touch::new(2, x1, y1)], frame().center)
                .unwrap();
            prop_assert_eq!(s.last_scale, end_scale);
            let expected = geometry::rotation(-std::f64::consts::FRAC_PI_2 - (-x1).atan2(-y1));
            prop_assert!((s.last_rotate_transform.m12 - expected.m12).abs() < 1e-9);
        }
    }
}
