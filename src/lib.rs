//! An antipole tree: a binary metric-space index that partitions a point
//! set by proximity to pairs of mutually distant pivots ("antipoles")
//! rather than by coordinate splits, supporting range search and
//! k-nearest-neighbor search under any user-supplied distance that
//! satisfies the triangle inequality.
//!
//! ```
//! use antipole::{BuildConfig, Euclidean, Point, Tree};
//!
//! let points: Vec<Point<Vec<i64>>> = (0..100).map(|i| Point::new(i as usize, vec![i, 0])).collect();
//! let distance = Euclidean;
//! let config = BuildConfig::new(1.5, 2).with_seed(42);
//! let tree = Tree::build_tree(&points, &distance, config);
//!
//! let query = vec![50_i64, 0];
//! let in_range = tree.range_search(&query, 3.0);
//! let nearest = tree.nearest_neighbor_search(&query, 5);
//! assert!(in_range.size() >= nearest.len());
//! ```

pub mod ancestors;
pub mod antipole;
pub mod build;
pub mod cluster;
pub mod constants;
pub mod distance;
pub mod error;
pub mod heap;
pub mod median;
pub mod metric_space;
pub mod number;
pub mod point;
pub mod point_list;
pub mod rng;
pub mod search;
mod tournament;
pub mod tree;

pub use build::BuildConfig;
pub use cluster::Cluster;
pub use distance::{Distance, Euclidean, Manhattan, SquaredEuclidean};
pub use heap::Heap;
pub use point::{Point, PointId};
pub use point_list::{PointEntry, PointList};
pub use rng::TournamentRng;
pub use search::knn::linear_knn_search;
pub use search::range::linear_range_search;
pub use tree::Tree;
