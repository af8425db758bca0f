use crate::indices::Ids;

/// An owned, static k-d tree over 2D points.
///
/// The tree is implicit: there are no node records, only the `ids` and `coords` buffers sorted so
/// that every sub-range `[left, right]` wider than `node_size` is split at its midpoint, with the
/// splitting axis alternating between x and y at each depth.
///
/// A new index is empty and unbuilt; it is populated by [`KDBush::build`], and queried through
/// [`KDBushIndex`][crate::KDBushIndex].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KDBush {
    pub(crate) ids: Ids,
    pub(crate) coords: Vec<f64>,
    pub(crate) node_size: usize,
    pub(crate) built: bool,
}

impl KDBush {
    /// Create a new, empty and unbuilt index. Every query on it returns an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`KDBush::build`] has completed on this index.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The number of points in the index.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
