//! Builds an antipole tree over randomly generated small-integer vectors
//! and runs a batch of range and k-nearest-neighbor queries against it,
//! logging progress at each stage.

use antipole::{BuildConfig, Euclidean, Point, Tree};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DIM: usize = 2;
const VEC_DOMAIN: i64 = 256;
const N_DATA: usize = 2_000;
const N_QUERY: usize = 20;
const N_NEIGHBOR: usize = 5;

fn random_vec(rng: &mut ChaCha8Rng) -> Vec<i64> {
    (0..DIM).map(|_| rng.gen_range(0..VEC_DOMAIN)).collect()
}

fn main() {
    env_logger::init();

    let seed: u64 = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock is after the epoch")
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let bounded_radius = VEC_DOMAIN as f64 * 0.05 * (DIM as f64).sqrt();
    let range = VEC_DOMAIN as f64 * 0.1;

    log::info!("dim={DIM} n_data={N_DATA} n_query={N_QUERY} n_neighbor={N_NEIGHBOR} seed={seed}");
    log::info!("bounded_radius={bounded_radius:.3} range={range:.3}");

    log::info!("generating {N_DATA} data points");
    let data: Vec<Point<Vec<i64>>> = (0..N_DATA).map(|i| Point::new(i, random_vec(&mut rng))).collect();

    let distance = Euclidean;
    let config = BuildConfig::new(bounded_radius, DIM).with_seed(seed);

    log::info!("building antipole tree");
    let tree = Tree::build_tree(&data, &distance, config);
    log::info!("tree built");

    log::info!("generating {N_QUERY} query points");
    let queries: Vec<Vec<i64>> = (0..N_QUERY).map(|_| random_vec(&mut rng)).collect();

    log::info!("running range search (radius={range:.3}) over {N_QUERY} queries");
    let mut total_in_range = 0;
    for query in &queries {
        let found = tree.range_search(query, range);
        total_in_range += found.size();
    }
    log::info!("range search done, {total_in_range} total matches across all queries");

    log::info!("running {N_NEIGHBOR}-nearest-neighbor search over {N_QUERY} queries");
    let mut total_found = 0;
    for query in &queries {
        let found = tree.nearest_neighbor_search(query, N_NEIGHBOR);
        total_found += found.len();
    }
    log::info!("nearest neighbor search done, {total_found} total neighbors returned across all queries");
}
