use glam::DVec3;
use planefit_linalg::vector::{cross3, norm3, sub3};

/// Relative tolerance under which three points are considered collinear.
///
/// The cross product `v1 × v2` of the edge vectors is compared against
/// `|v1| |v2|`, i.e. the sine of the angle between the edges.
pub const COLLINEAR_EPSILON: f64 = 1e-12;

/// Error types for plane construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PlaneError {
    /// The normal vector `(A, B, C)` is the zero vector.
    #[error("plane normal is the zero vector")]
    ZeroNormal,

    /// A coefficient or input coordinate is NaN or infinite.
    #[error("plane coefficients or points are not finite")]
    NonFinite,

    /// The three points do not span a plane.
    #[error("points are collinear or coincident")]
    Collinear,
}

/// An implicit plane `A·x + B·y + C·z + D = 0` with a unit normal `(A, B, C)`.
///
/// Since the normal has unit length, [`PlaneModel::signed_distance`] is the
/// signed Euclidean distance of a point to the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneModel {
    normal: DVec3,
    offset: f64,
}

impl PlaneModel {
    /// Create a plane from its coefficients.
    ///
    /// The coefficients are scaled so that `(A, B, C)` has unit length.
    ///
    /// # Arguments
    ///
    /// * `a`, `b`, `c` - The normal vector, need not be normalized.
    /// * `d` - The offset.
    ///
    /// # Errors
    ///
    /// [`PlaneError::NonFinite`] on NaN or infinite coefficients and
    /// [`PlaneError::ZeroNormal`] if `(A, B, C)` is zero.
    ///
    /// Example:
    ///
    /// ```
    /// use planefit_3d::plane::PlaneModel;
    ///
    /// let plane = PlaneModel::new(0.0, 0.0, 2.0, -4.0).unwrap();
    /// assert_eq!(plane.coefficients(), [0.0, 0.0, 1.0, -2.0]);
    /// assert_eq!(plane.signed_distance(&[1.0, 1.0, 5.0]), 3.0);
    /// ```
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, PlaneError> {
        if ![a, b, c, d].iter().all(|v| v.is_finite()) {
            return Err(PlaneError::NonFinite);
        }
        let normal = DVec3::new(a, b, c);
        let norm = normal.length();
        if norm == 0.0 {
            return Err(PlaneError::ZeroNormal);
        }
        if !norm.is_finite() {
            return Err(PlaneError::NonFinite);
        }
        Ok(Self {
            normal: normal / norm,
            offset: d / norm,
        })
    }

    /// Create a plane from a normal and a point on the plane.
    pub fn from_normal_and_point(normal: &[f64; 3], point: &[f64; 3]) -> Result<Self, PlaneError> {
        if !point.iter().all(|v| v.is_finite()) {
            return Err(PlaneError::NonFinite);
        }
        let n = DVec3::from_array(*normal);
        let d = -n.dot(DVec3::from_array(*point));
        Self::new(n.x, n.y, n.z, d)
    }

    /// Fit the exact plane through three points.
    ///
    /// With `v1 = p2 - p1` and `v2 = p3 - p1` the normal is `v1 × v2`
    /// normalized, and `D = -n·p1`. The orientation of the normal follows
    /// the order of the points.
    ///
    /// # Errors
    ///
    /// [`PlaneError::Collinear`] if the points are collinear or coincident,
    /// see [`COLLINEAR_EPSILON`].
    pub fn from_points(p1: &[f64; 3], p2: &[f64; 3], p3: &[f64; 3]) -> Result<Self, PlaneError> {
        if ![p1, p2, p3].iter().all(|p| p.iter().all(|v| v.is_finite())) {
            return Err(PlaneError::NonFinite);
        }

        let v1 = sub3(p2, p1);
        let v2 = sub3(p3, p1);
        let n = cross3(&v1, &v2);

        let norm = norm3(&n);
        if norm <= COLLINEAR_EPSILON * norm3(&v1) * norm3(&v2) {
            return Err(PlaneError::Collinear);
        }

        Self::from_normal_and_point(&n, p1)
    }

    /// The unit normal `(A, B, C)`.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// The offset `D`.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The coefficients `[A, B, C, D]`.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.offset]
    }

    /// Signed distance `n·p + D` of a point to the plane.
    #[inline]
    pub fn signed_distance(&self, point: &[f64; 3]) -> f64 {
        self.normal.x * point[0] + self.normal.y * point[1] + self.normal.z * point[2] + self.offset
    }

    /// Absolute distance of a point to the plane.
    #[inline]
    pub fn distance(&self, point: &[f64; 3]) -> f64 {
        self.signed_distance(point).abs()
    }

    /// The same plane with the opposite orientation.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// The same plane oriented so that its normal agrees with `other`'s.
    pub fn oriented_like(&self, other: &PlaneModel) -> Self {
        if self.normal.dot(other.normal) < 0.0 {
            self.flipped()
        } else {
            *self
        }
    }

    /// Absolute cosine of the angle between the two normals.
    ///
    /// `1.0` means parallel planes regardless of orientation.
    pub fn angle_cosine(&self, other: &PlaneModel) -> f64 {
        self.normal.dot(other.normal).abs().min(1.0)
    }
}

impl std::fmt::Display for PlaneModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.6}x + {:.6}y + {:.6}z + {:.6} = 0",
            self.normal.x, self.normal.y, self.normal.z, self.offset
        )
    }
}
