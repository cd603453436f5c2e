//! The recursive tree builder: partitions a point set by proximity to two
//! antipoles until each remaining subset is tight enough to become a
//! leaf cluster.

use crate::ancestors::AncestorMap;
use crate::antipole;
use crate::cluster::Cluster;
use crate::distance::Distance;
use crate::median;
use crate::metric_space::MetricSpace;
use crate::point::PointId;
use crate::point_list::PointList;
use crate::rng::TournamentRng;
use crate::tree::Node;

/// Construction parameters for [`crate::tree::Tree::build_tree`].
///
/// Plays the configuration-object role CLAM's `PartitionCriteria` plays
/// for its own builder (`tree.partition(&criteria, recursive)`): the
/// knobs that shape the tree are grouped here rather than passed as a
/// long, easy-to-misorder parameter list.
#[derive(Debug, Clone, Copy)]
pub struct BuildConfig {
    /// The maximum leaf-cluster radius the builder aims for. A split is
    /// forced whenever some pair in a candidate subset exceeds
    /// `2 * target_radius`.
    pub target_radius: f64,
    /// Embedding dimensionality, used only to size the antipole/1-median
    /// tournament brackets (`tournament_size = dimension_hint + 1`).
    pub dimension_hint: usize,
    /// Seed for the tournament reductions' random source. `None` seeds
    /// from entropy, which makes repeated builds non-reproducible; pass
    /// `Some(seed)` for deterministic trees (e.g. in tests).
    pub seed: Option<u64>,
}

impl BuildConfig {
    /// Builds a config, asserting the preconditions `build_tree` requires
    /// of its caller (spec.md's "misuse" failure category).
    pub fn new(target_radius: f64, dimension_hint: usize) -> Self {
        crate::error::assert_valid_target_radius(target_radius);
        crate::error::assert_valid_dimension_hint(dimension_hint);
        Self {
            target_radius,
            dimension_hint,
            seed: None,
        }
    }

    /// Returns this config with a pinned RNG seed, for reproducible
    /// builds.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

pub(crate) struct BuildContext<'a, T, D> {
    pub(crate) space: MetricSpace<'a, T, D>,
    pub(crate) config: BuildConfig,
    pub(crate) rng: TournamentRng,
    pub(crate) ancestors: AncestorMap,
}

impl<'a, T, D: Distance<T>> BuildContext<'a, T, D> {
    pub(crate) fn new(space: MetricSpace<'a, T, D>, config: BuildConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => TournamentRng::seeded(seed),
            None => TournamentRng::from_entropy(),
        };
        Self {
            space,
            config,
            rng,
            ancestors: AncestorMap::new(),
        }
    }
}

/// Recursively builds a node from `set`, optionally given an antipole
/// hint already known to satisfy the split gate (see
/// [`antipole::ancestor_hint`]).
pub(crate) fn build_node<T, D: Distance<T>>(
    ctx: &mut BuildContext<T, D>,
    set: PointList,
    hint: Option<(PointId, PointId)>,
) -> Node {
    let (a, b) = match hint.or_else(|| antipole::split_gated(&ctx.space, &set, ctx.config.target_radius)) {
        Some(pair) => pair,
        None => {
            log::debug!("leaf: {} points, no pair exceeds 2*target_radius", set.size());
            return Node::Leaf(Some(make_cluster(ctx, &set)));
        }
    };

    log::debug!("internal node: antipoles ({a}, {b}) splitting {} points", set.size());

    let mut set_a = PointList::with_capacity(set.size());
    let mut set_b = PointList::with_capacity(set.size());
    let mut radius_a = 0.0_f64;
    let mut radius_b = 0.0_f64;

    for entry in set.iter() {
        let p = entry.point;
        let d_a = ctx.space.dist(a, p);
        let d_b = ctx.space.dist(b, p);
        ctx.ancestors.record(p, a, d_a);
        ctx.ancestors.record(p, b, d_b);
        // ties go to b's side, per spec.
        if d_a < d_b {
            set_a.add(p, d_a);
            radius_a = radius_a.max(d_a);
        } else {
            set_b.add(p, d_b);
            radius_b = radius_b.max(d_b);
        }
    }

    let hint_a = antipole::ancestor_hint(&set_a, ctx.config.target_radius, a, &ctx.ancestors);
    let hint_b = antipole::ancestor_hint(&set_b, ctx.config.target_radius, b, &ctx.ancestors);

    let left = build_node(ctx, set_a, hint_a);
    let right = build_node(ctx, set_b, hint_b);

    Node::Internal {
        a,
        b,
        radius_a,
        radius_b,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn make_cluster<T, D: Distance<T>>(ctx: &mut BuildContext<T, D>, set: &PointList) -> Cluster {
    let centroid = median::approx_1_median(&ctx.space, set, ctx.config.dimension_hint, &mut ctx.rng);

    let mut members = PointList::with_capacity(set.size().saturating_sub(1));
    let mut radius = 0.0_f64;
    for entry in set.iter() {
        if entry.point == centroid {
            continue;
        }
        let d = ctx.space.dist(centroid, entry.point);
        members.add(entry.point, d);
        radius = radius.max(d);
    }

    Cluster::new(centroid, radius, members)
}
