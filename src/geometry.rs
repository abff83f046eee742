//! Typed geometry for the label and its parent.
//!
//! Begin-phase anchors are computed in the label's own space, move-phase positions are read in
//! the parent's space. The unit tags keep the two apart.

use euclid::{Angle, Point2D, Rect, Size2D, Transform2D, Vector2D};
use serde::{Deserialize, Serialize};

/// Self-local space: the label's untransformed bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPx;

/// Parent-local space: where the label's center lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentPx;

pub type LabelPoint = Point2D<f64, LabelPx>;
pub type LabelSize = Size2D<f64, LabelPx>;
pub type LabelRect = Rect<f64, LabelPx>;
pub type ParentPoint = Point2D<f64, ParentPx>;
pub type ParentVector = Vector2D<f64, ParentPx>;

/// The label's transform, applied about its center.
pub type LabelTransform = Transform2D<f64, LabelPx, ParentPx>;
/// A rotation (or rotation + scale) expressed in parent space.
pub type RotateTransform = Transform2D<f64, ParentPx, ParentPx>;

pub fn rotation(radians: f64) -> RotateTransform {
    Transform2D::rotation(Angle::radians(radians))
}

/// Distance, angle and midpoint of two points.
///
/// The angle is `atan2(dx, dy)`: it is measured from the Y axis, and the rotation sign of the
/// whole gesture depends on that ordering.
pub fn distance_radian_and_center<U>(
    a: Point2D<f64, U>,
    b: Point2D<f64, U>,
) -> (f64, f64, Point2D<f64, U>) {
    let diff = a - b;
    let distance = diff.length();
    let radian = diff.x.atan2(diff.y);
    let center = ((a.to_vector() + b.to_vector()) / 2.0).to_point();
    (distance, radian, center)
}

/// Where a label sits inside its parent.
///
/// A local point maps to the parent as `center + transform(local - size / 2)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub center: ParentPoint,
    pub size: LabelSize,
    pub transform: LabelTransform,
}

impl Frame {
    pub fn new(center: ParentPoint, size: LabelSize) -> Self {
        Self {
            center,
            size,
            transform: Transform2D::identity(),
        }
    }

    /// The label transform pre-translated by minus half the bounds size.
    pub fn centered_transform(&self) -> LabelTransform {
        let to_center: Transform2D<f64, LabelPx, LabelPx> =
            Transform2D::translation(-self.size.width / 2.0, -self.size.height / 2.0);
        to_center.then(&self.transform)
    }

    /// Offset of a local point from the label center, rotated and scaled into parent space.
    pub fn offset_from_center(&self, local: LabelPoint) -> ParentVector {
        self.centered_transform().transform_point(local).to_vector()
    }

    pub fn to_parent(&self, local: LabelPoint) -> ParentPoint {
        self.center + self.offset_from_center(local)
    }

    /// Parent point expressed in the label's own space.
    ///
    /// A singular transform (zero scale) has no inverse; only the centering is undone then.
    pub fn to_local(&self, parent: ParentPoint) -> LabelPoint {
        let offset = parent - self.center;
        let local_offset = match self.transform.inverse() {
            Some(inverse) => inverse.transform_vector(offset),
            None => offset.cast_unit(),
        };
        (local_offset + self.size.to_vector() / 2.0).to_point()
    }

    pub fn bounds(&self) -> LabelRect {
        Rect::from_size(self.size)
    }

    /// Uniform scale factor carried by the transform.
    pub fn visual_scale(&self) -> f64 {
        self.transform.m11.hypot(self.transform.m12)
    }

    /// Rotation carried by the transform, in radians.
    pub fn visual_rotation(&self) -> f64 {
        self.transform.m12.atan2(self.transform.m11)
    }
}

#[cfg(test)]
pub(crate) fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}
