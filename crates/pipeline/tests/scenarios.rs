//! Worked scenarios, run in every mode and schedule.

use nearlink_components::RankConfig;
use nearlink_pairs::{Pair, PairConfig};
use nearlink_pipeline::{Mode, PipelineConfig, Solution, solve};
use nearlink_stream::{Schedule, StreamConfig};

fn configs(k: usize, m: usize) -> Vec<PipelineConfig> {
    let base = PipelineConfig::new(PairConfig::new(k).with_bit_width(8), RankConfig::new(m));
    vec![
        base.clone(),
        base.clone().with_mode(Mode::Streaming),
        base.with_mode(Mode::Streaming)
            .with_stream(StreamConfig::new(4).with_schedule(Schedule::Triangular)),
    ]
}

fn solve_all(rows: &[[u32; 3]], k: usize, m: usize) -> Vec<Solution> {
    configs(k, m)
        .iter()
        .map(|config| solve(rows, config).unwrap())
        .collect()
}

#[test]
fn three_close_points_and_an_outlier() {
    let rows = [[0, 0, 0], [1, 0, 0], [0, 1, 0], [10, 10, 10]];
    for solution in solve_all(&rows, 2, 2) {
        assert_eq!(solution.pairs(), &[Pair::new(0, 1, 1), Pair::new(0, 2, 1)]);
        assert_eq!(solution.sizes(), vec![3, 1]);
        assert_eq!(solution.product(), 3);
        assert_eq!(solution.ranking().top()[0].root, 0);
        assert_eq!(solution.ranking().top()[1].root, 3);
    }
}

#[test]
fn two_disjoint_clusters() {
    let cluster = [[0, 0, 0], [1, 0, 0], [0, 1, 0], [1, 1, 0]];
    let rows: Vec<[u32; 3]> = cluster
        .iter()
        .copied()
        .chain(cluster.iter().map(|&[x, y, z]| [x + 100, y + 100, z + 100]))
        .collect();
    // Each cluster has 6 internal pairs, all shorter than any cross pair.
    for solution in solve_all(&rows, 12, 2) {
        assert_eq!(solution.pairs().len(), 12);
        assert!(solution.pairs().iter().all(|p| p.sq_distance() <= 2));
        assert_eq!(solution.sizes(), vec![4, 4]);
        assert_eq!(solution.product(), 16);
        assert_eq!(solution.ranking().n_components(), 2);
    }
}

#[test]
fn no_pairs_leaves_singletons() {
    let rows = [[0, 0, 0], [1, 0, 0], [2, 0, 0], [3, 0, 0], [4, 0, 0]];
    for solution in solve_all(&rows, 0, 2) {
        assert!(solution.pairs().is_empty());
        assert_eq!(solution.sizes(), vec![1, 1]);
        assert_eq!(solution.product(), 1);
        assert_eq!(solution.ranking().n_components(), 5);
    }
}

#[test]
fn partial_batch_accepts_every_point() {
    let rows: Vec<[u32; 3]> = (0..7).map(|i| [i * 2, 0, 0]).collect();
    let config = &configs(3, 3)[1];
    let solution = solve(&rows, config).unwrap();
    let ingest = solution.ingest().unwrap();
    assert_eq!(ingest.consumer.accepted, 7);
    assert_eq!(ingest.consumer.padding, 1);
    assert_eq!(ingest.consumer.batches, 2);
}

#[test]
fn fewer_components_than_requested() {
    let rows = [[0, 0, 0], [1, 0, 0]];
    for solution in solve_all(&rows, 1, 3) {
        assert_eq!(solution.sizes(), vec![2]);
        assert_eq!(solution.product(), 2);
    }
}
