use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::geo::distance::{box_dist, haver_sin, haver_sin_dist, RAD};
use crate::geo::{GeoBox, EARTH_RADIUS_KM};
use crate::kdbush::KDBushIndex;

/// Search items in order of great-circle distance from the given longitude/latitude.
///
/// - max_results: stop after this many results; `None` for no limit
/// - max_distance_km: only return items at most this far away; `None` or a negative value for no
///   limit
/// - predicate: called with an item's input position; items for which it returns `false` are
///   skipped
///
/// Returns the input positions of the found items, nearest first.
///
/// ```
/// use kdbush::geo::{around, LngLat};
/// use kdbush::KDBush;
///
/// let points = vec![
///     LngLat::new(112.74996, -7.26585), // Surabaya
///     LngLat::new(106.82685, -6.17335), // Jakarta
///     LngLat::new(112.74641, -7.26166), // Surabaya
/// ];
/// let index = KDBush::from_points_default(&points).unwrap();
///
/// let results = around(&index, 112.75, -7.27, None, Some(10.), None);
/// assert_eq!(results, vec![0, 2]);
/// ```
pub fn around<T: KDBushIndex>(
    index: &T,
    lng: f64,
    lat: f64,
    max_results: Option<usize>,
    max_distance_km: Option<f64>,
    predicate: Option<&dyn Fn(usize) -> bool>,
) -> Vec<usize> {
    let ids = index.ids();
    let coords = index.coords();
    let node_size = index.node_size();

    if !index.is_built() || ids.is_empty() || max_results == Some(0) {
        return vec![];
    }
    if !lng.is_finite() || !lat.is_finite() {
        log::warn!("Nearest-neighbor query from non-finite location ({lng}, {lat})");
    }

    let max_haver_sin_dist = max_haver_sin_dist(max_distance_km);
    let cos_lat = f64::cos(lat * RAD);

    let point_entry = |i: usize| {
        let id = ids.get(i);
        if predicate.is_some_and(|accept| !accept(id)) {
            return None;
        }
        let dist = haver_sin_dist(lng, lat, coords[2 * i], coords[2 * i + 1], cos_lat);
        Some(Reverse(QueueEntry {
            dist,
            item: QueueItem::Point(id),
        }))
    };

    // a distance-sorted priority queue that will contain both points and kd-tree nodes
    let mut queue = BinaryHeap::new();
    // the top kd-tree node covers the whole Earth
    queue.push(Reverse(QueueEntry {
        dist: 0.,
        item: QueueItem::Node {
            left: 0,
            right: ids.len() - 1,
            axis: 0,
            bbox: GeoBox::WORLD,
        },
    }));

    let mut results = vec![];
    let mut pops = 0_usize;

    while let Some(Reverse(entry)) = queue.pop() {
        pops += 1;
        match entry.item {
            // points come out of the queue closer than everything left in it, since each node's
            // distance is a lower bound of the distances to its children
            QueueItem::Point(id) => {
                if entry.dist > max_haver_sin_dist {
                    break;
                }
                results.push(id);
                if max_results.is_some_and(|max_results| results.len() >= max_results) {
                    break;
                }
            }
            QueueItem::Node {
                left,
                right,
                axis,
                bbox,
            } => {
                // leaf node: add all of its points to the queue
                if right - left <= node_size {
                    queue.extend((left..right + 1).filter_map(|i| point_entry(i)));
                    continue;
                }

                // otherwise add the middle point, and both halves split at it
                let m = (left + right) >> 1;
                queue.extend(point_entry(m));

                let (lower, upper) = bbox.split(axis, coords[2 * m + axis]);
                for (left, right, bbox) in [(left, m - 1, lower), (m + 1, right, upper)] {
                    let dist = box_dist(lng, lat, cos_lat, &bbox);
                    if dist > max_haver_sin_dist {
                        continue;
                    }
                    queue.push(Reverse(QueueEntry {
                        dist,
                        item: QueueItem::Node {
                            left,
                            right,
                            axis: 1 - axis,
                            bbox,
                        },
                    }));
                }
            }
        }
    }

    log::trace!(
        "Nearest-neighbor query from ({lng}, {lat}) found {} items in {pops} queue pops",
        results.len()
    );

    results
}

/// The haversine cutoff for a distance limit in kilometers. The haversine is periodic, so limits
/// of half the Earth's circumference or more don't limit anything.
fn max_haver_sin_dist(max_distance_km: Option<f64>) -> f64 {
    match max_distance_km {
        Some(km) if km >= 0. && km < std::f64::consts::PI * EARTH_RADIUS_KM => {
            haver_sin(km / EARTH_RADIUS_KM)
        }
        _ => f64::INFINITY,
    }
}

/// What a queue entry stands for: either a single item, or a not-yet-expanded kd-tree node.
#[derive(Debug, Clone, Copy, PartialEq)]
enum QueueItem {
    Point(usize),
    Node {
        left: usize,
        right: usize,
        axis: usize,
        bbox: GeoBox,
    },
}

/// An item and its distance, for use in the priority queue.
///
/// For a point `dist` is its haversine distance to the query; for a node it is the lower bound
/// over the node's bounding box.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    dist: f64,
    item: QueueItem,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // on ties points sort first, so they are returned without expanding more nodes
        self.dist.total_cmp(&other.dist).then_with(|| {
            match (&self.item, &other.item) {
                (QueueItem::Point(_), QueueItem::Node { .. }) => Ordering::Less,
                (QueueItem::Node { .. }, QueueItem::Point(_)) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn distance_limits() {
        assert_eq!(max_haver_sin_dist(None), f64::INFINITY);
        assert_eq!(max_haver_sin_dist(Some(-1.)), f64::INFINITY);
        assert_eq!(max_haver_sin_dist(Some(1e6)), f64::INFINITY);
        assert_eq!(max_haver_sin_dist(Some(0.)), 0.);
        let ten_km = max_haver_sin_dist(Some(10.));
        assert!(ten_km > 0. && ten_km < max_haver_sin_dist(Some(20.)));
    }

    #[test]
    fn points_pop_before_nodes_on_ties() {
        let point = QueueEntry {
            dist: 0.5,
            item: QueueItem::Point(3),
        };
        let node = QueueEntry {
            dist: 0.5,
            item: QueueItem::Node {
                left: 0,
                right: 9,
                axis: 1,
                bbox: GeoBox::WORLD,
            },
        };
        let nearer_node = QueueEntry { dist: 0.1, ..node };

        let mut queue = BinaryHeap::from([Reverse(node), Reverse(point), Reverse(nearer_node)]);
        let mut pop = || queue.pop().map(|Reverse(entry)| (entry.dist, entry.item));
        assert_eq!(pop(), Some((nearer_node.dist, nearer_node.item)));
        assert_eq!(pop(), Some((point.dist, point.item)));
        assert_eq!(pop(), Some((node.dist, node.item)));
        assert_eq!(pop(), None);
    }

    #[test]
    fn equality_agrees_with_ordering() {
        let point = |dist, id| QueueEntry {
            dist,
            item: QueueItem::Point(id),
        };

        // NaN equals itself, as under `total_cmp`
        assert_eq!(point(f64::NAN, 0), point(f64::NAN, 0));
        // -0 sorts before +0, so they must not be equal either
        assert_ne!(point(-0., 0), point(0., 0));
        assert_eq!(point(-0., 0).cmp(&point(0., 0)), Ordering::Less);
        // entries only differing in which item they hold rank the same
        assert_eq!(point(0.25, 1), point(0.25, 2));
        assert_eq!(point(0.25, 1).cmp(&point(0.25, 2)), Ordering::Equal);
    }
}
