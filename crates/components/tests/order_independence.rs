//! The final partition must not depend on merge order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use nearlink_components::{RankConfig, UnionFind, component_sizes, rank_components};

fn random_pairs(n: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect()
}

fn merged(n: usize, pairs: &[(usize, usize)]) -> UnionFind {
    let mut uf = UnionFind::new(n);
    uf.merge_pairs(pairs.iter().copied());
    uf
}

#[test]
fn shuffled_merges_give_same_partition() {
    let n = 200;
    let mut pairs = random_pairs(n, 150, 3);
    let reference = merged(n, &pairs).canonical_labels();

    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        pairs.shuffle(&mut rng);
        assert_eq!(merged(n, &pairs).canonical_labels(), reference);
    }
}

#[test]
fn swapped_endpoints_give_same_partition() {
    let n = 64;
    let pairs = random_pairs(n, 50, 8);
    let swapped: Vec<_> = pairs.iter().map(|&(a, b)| (b, a)).collect();
    assert_eq!(
        merged(n, &pairs).canonical_labels(),
        merged(n, &swapped).canonical_labels()
    );
}

#[test]
fn shuffled_merges_give_same_ranking_sizes() {
    let n = 300;
    let mut pairs = random_pairs(n, 250, 21);
    let mut uf = merged(n, &pairs);
    uf.flatten();
    let reference = rank_components(&uf, &RankConfig::new(5)).unwrap();

    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..10 {
        pairs.shuffle(&mut rng);
        let mut uf = merged(n, &pairs);
        uf.flatten();
        let ranking = rank_components(&uf, &RankConfig::new(5)).unwrap();
        assert_eq!(ranking.sizes(), reference.sizes());
        assert_eq!(ranking.product(), reference.product());
    }
}

#[test]
fn sizes_sum_to_n_and_roots_are_fixed_points() {
    let n = 500;
    let pairs = random_pairs(n, 400, 5);
    let mut uf = merged(n, &pairs);
    for x in 0..n {
        let r = uf.find(x);
        assert_eq!(uf.find(r), r);
        assert!(uf.is_root(r));
    }
    let total: usize = component_sizes(&uf).iter().map(|c| c.size).sum();
    assert_eq!(total, n);
    assert_eq!(component_sizes(&uf).len(), uf.n_sets());
}
