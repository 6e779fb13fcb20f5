//! Connected components of a closest-pair graph.
//!
//! Pairs are merged into a [`UnionFind`] forest (union by rank, full path
//! compression); once every pair is merged, [`rank_components`] sizes each
//! set and reports the M largest together with the product of their sizes.
//!
//! # Quick start
//!
//! ```
//! use nearlink_components::{RankConfig, UnionFind, rank_components};
//!
//! let mut forest = UnionFind::new(4);
//! forest.merge_pairs([(0, 1), (0, 2)]);
//! forest.flatten();
//!
//! let ranking = rank_components(&forest, &RankConfig::new(2)).unwrap();
//! assert_eq!(ranking.sizes(), vec![3, 1]);
//! assert_eq!(ranking.product(), 3);
//! ```
//!
//! The final partition depends only on the set of merged pairs, never on
//! their order; ranking ties are broken by the smaller root index.

pub mod config;
pub mod error;
pub mod forest;
pub mod rank;
pub mod result;

pub use config::RankConfig;
pub use error::ComponentError;
pub use forest::UnionFind;
pub use rank::{component_sizes, rank_components};
pub use result::{ComponentRanking, RankedComponent};
