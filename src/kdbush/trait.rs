use geo_traits::{CoordTrait, RectTrait};
use tinyvec::TinyVec;

use crate::indices::Indices;
use crate::kdbush::KDBush;

/// A trait for searching and accessing data out of a KDBush index.
///
/// Implementors only provide the raw buffers; the range and radius searches are shared.
pub trait KDBushIndex: Sized {
    /// The underlying raw coordinate buffer, interleaved as `[x0, y0, x1, y1, ...]` in tree order.
    fn coords(&self) -> &[f64];

    /// The underlying raw ids buffer: for each tree position, the point's position in the input.
    fn ids(&self) -> Indices<'_>;

    /// The leaf size of this tree.
    fn node_size(&self) -> usize;

    /// Whether the buffers hold a completed build.
    fn is_built(&self) -> bool;

    /// The number of items in this index
    fn num_items(&self) -> usize {
        self.ids().len()
    }

    /// Search the index for items within a given bounding box.
    ///
    /// - min_x: bbox
    /// - min_y: bbox
    /// - max_x: bbox
    /// - max_y: bbox
    ///
    /// Returns indices of found items, in no particular order. An inverted box matches nothing.
    fn range(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<usize> {
        if !self.is_built() || self.num_items() == 0 || min_x > max_x || min_y > max_y {
            return vec![];
        }
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            log::warn!("Range query with non-finite bounds: [{min_x}, {min_y}, {max_x}, {max_y}]");
        }

        let (lo, hi) = ([min_x, min_y], [max_x, max_y]);
        kd_search(
            self,
            |x, y| x >= min_x && x <= max_x && y >= min_y && y <= max_y,
            |axis, split| (lo[axis] <= split, hi[axis] >= split),
        )
    }

    /// Search the index for items within a given bounding box.
    ///
    /// Returns indices of found items
    fn range_rect(&self, rect: &impl RectTrait<T = f64>) -> Vec<usize> {
        self.range(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// Search the index for items within a given radius.
    ///
    /// - qx: x value of query point
    /// - qy: y value of query point
    /// - r: radius
    ///
    /// Returns indices of found items, in no particular order. A negative radius matches nothing.
    fn within(&self, qx: f64, qy: f64, r: f64) -> Vec<usize> {
        if !self.is_built() || self.num_items() == 0 || r < 0. {
            return vec![];
        }
        if ![qx, qy, r].iter().all(|v| v.is_finite()) {
            log::warn!("Radius query with non-finite input: ({qx}, {qy}), r = {r}");
        }

        let r2 = r * r;
        let q = [qx, qy];
        kd_search(
            self,
            |x, y| sq_dist(x, y, qx, qy) <= r2,
            |axis, split| (q[axis] - r <= split, q[axis] + r >= split),
        )
    }

    /// Search the index for items within a given radius.
    ///
    /// - coord: coordinate of query point
    /// - r: radius
    ///
    /// Returns indices of found items
    fn within_coord(&self, coord: &impl CoordTrait<T = f64>, r: f64) -> Vec<usize> {
        self.within(coord.x(), coord.y(), r)
    }
}

impl KDBushIndex for KDBush {
    fn coords(&self) -> &[f64] {
        debug_assert_eq!(self.coords.len(), 2 * self.ids.len());
        &self.coords
    }

    fn ids(&self) -> Indices<'_> {
        self.ids.as_indices()
    }

    fn node_size(&self) -> usize {
        self.node_size
    }

    fn is_built(&self) -> bool {
        self.built
    }
}

/// Depth-first walk over the implicit tree of `index`.
///
/// `accepts(x, y)` decides whether an item belongs in the result. `descends(axis, split)` is
/// given a node's splitting axis and value and returns whether the query can reach its lower and
/// upper halves.
fn kd_search<I: KDBushIndex>(
    index: &I,
    accepts: impl Fn(f64, f64) -> bool,
    descends: impl Fn(usize, f64) -> (bool, bool),
) -> Vec<usize> {
    let ids = index.ids();
    let coords = index.coords();
    let node_size = index.node_size();

    // pending (left, right, axis) ranges, at most one more than the tree depth
    let mut stack: TinyVec<[(usize, usize, usize); 32]> = TinyVec::new();
    stack.push((0, ids.len() - 1, 0));

    let mut result = vec![];
    while let Some((left, right, axis)) = stack.pop() {
        // small enough to scan
        if right - left <= node_size {
            for i in left..=right {
                if accepts(coords[2 * i], coords[2 * i + 1]) {
                    result.push(ids.get(i));
                }
            }
            continue;
        }

        let m = (left + right) >> 1;
        let (x, y) = (coords[2 * m], coords[2 * m + 1]);
        if accepts(x, y) {
            result.push(ids.get(m));
        }

        let split = if axis == 0 { x } else { y };
        let (lower, upper) = descends(axis, split);
        if lower {
            stack.push((left, m - 1, 1 - axis));
        }
        if upper {
            stack.push((m + 1, right, 1 - axis));
        }
    }

    result
}

#[inline]
pub(crate) fn sq_dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
