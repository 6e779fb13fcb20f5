//! Generate command: reproducible random points.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, info_span};

use nearlink_pairs::PairConfig;

use crate::cli::GenerateArgs;
use crate::input::write_points;

/// Run the point generator.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    let layout = PairConfig::new(0)
        .with_dims(args.dims)
        .with_bit_width(args.bit_width);
    layout.validate().context("invalid point layout")?;

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let rows = random_points(&mut rng, args.count, &layout);
    write_points(&args.output, &rows)?;
    info!(
        path = %args.output.display(),
        n_points = rows.len(),
        dims = args.dims,
        bit_width = args.bit_width,
        "points written"
    );
    Ok(())
}

/// Draws `count` points uniformly over the layout's coordinate range.
fn random_points<R: Rng>(rng: &mut R, count: usize, layout: &PairConfig) -> Vec<Vec<u32>> {
    let max = layout.max_coordinate();
    (0..count)
        .map(|_| (0..layout.dims()).map(|_| rng.random_range(0..=max)).collect())
        .collect()
}
