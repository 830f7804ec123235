use glam::DVec3;

/// An ordered set of 3D points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    // The points in the point cloud.
    points: Vec<[f64; 3]>,
}

impl PointCloud {
    /// Create a new point cloud from points.
    pub fn new(points: Vec<[f64; 3]>) -> Self {
        Self { points }
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Consume the point cloud and return its points.
    pub fn into_points(self) -> Vec<[f64; 3]> {
        self.points
    }

    /// Get the minimum bound of the point cloud.
    pub fn min_bound(&self) -> DVec3 {
        self.fold_bound(DVec3::min)
    }

    /// Get the maximum bound of the point cloud.
    pub fn max_bound(&self) -> DVec3 {
        self.fold_bound(DVec3::max)
    }

    fn fold_bound(&self, f: impl Fn(DVec3, DVec3) -> DVec3) -> DVec3 {
        let mut iter = self.points.iter().map(|p| DVec3::from_array(*p));
        match iter.next() {
            Some(first) => iter.fold(first, f),
            None => DVec3::ZERO,
        }
    }

    /// Create a new point cloud with the points at the given indices.
    ///
    /// Indices out of range are skipped.
    pub fn select(&self, indices: &[usize]) -> Self {
        let points = indices
            .iter()
            .filter_map(|&i| self.points.get(i).copied())
            .collect();
        Self { points }
    }
}

impl From<Vec<[f64; 3]>> for PointCloud {
    fn from(points: Vec<[f64; 3]>) -> Self {
        Self::new(points)
    }
}

impl AsRef<[[f64; 3]]> for PointCloud {
    fn as_ref(&self) -> &[[f64; 3]] {
        &self.points
    }
}
