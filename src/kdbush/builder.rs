use crate::error::{KdbushError, Result};
use crate::indices::Ids;
use crate::kdbush::select::select;
use crate::kdbush::KDBush;
use crate::point::Point;

/// The default leaf size. Higher values mean faster indexing but slower search, and vice versa.
pub const DEFAULT_NODE_SIZE: usize = 64;

impl KDBush {
    /// Build an index over `points` with the provided node size.
    ///
    /// Query results refer to points by their position in `points`.
    pub fn from_points<P: Point>(points: &[P], node_size: usize) -> Result<Self> {
        let mut index = Self::new();
        index.build(points, node_size)?;
        Ok(index)
    }

    /// Build an index over `points` with [`DEFAULT_NODE_SIZE`].
    pub fn from_points_default<P: Point>(points: &[P]) -> Result<Self> {
        Self::from_points(points, DEFAULT_NODE_SIZE)
    }

    /// Replace the contents of this index with a freshly kd-sorted copy of `points`.
    ///
    /// Any previously built content is discarded. On error the index is left untouched.
    pub fn build<P: Point>(&mut self, points: &[P], node_size: usize) -> Result<&mut Self> {
        if node_size < 1 {
            return Err(KdbushError::InvalidNodeSize(node_size));
        }

        let mut ids = Ids::identity(points.len())?;
        let mut coords = Vec::with_capacity(2 * points.len());
        for point in points {
            coords.push(point.x());
            coords.push(point.y());
        }

        if let Some(last) = points.len().checked_sub(1) {
            sort(&mut ids, &mut coords, node_size, 0, last, 0);
        }

        self.ids = ids;
        self.coords = coords;
        self.node_size = node_size;
        self.built = true;

        log::debug!(
            "Built kdbush index over {} points with node size {}",
            self.ids.len(),
            node_size
        );

        Ok(self)
    }
}

/// Arrange `[left, right]` into the implicit tree: the midpoint holds the median along `axis`, and
/// each half is arranged the same way along the other axis until it fits in a leaf.
fn sort(
    ids: &mut Ids,
    coords: &mut [f64],
    node_size: usize,
    left: usize,
    right: usize,
    axis: usize,
) {
    if right - left <= node_size {
        return;
    }

    let median = (left + right) >> 1;
    select(ids, coords, median, left, right, axis);

    let next_axis = 1 - axis;
    sort(ids, coords, node_size, left, median - 1, next_axis);
    sort(ids, coords, node_size, median + 1, right, next_axis);
}
