//! Solve command: select the closest pairs and rank their components.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use nearlink_pipeline::{Solution, solve};

use crate::cli::SolveArgs;
use crate::config::{self, NearlinkConfig};
use crate::convert;
use crate::input::read_points;

/// Run the solve pipeline.
pub fn run(args: SolveArgs) -> Result<()> {
    let _cmd = info_span!("solve").entered();

    let mut toml_cfg = config::load(args.config.as_deref())?;
    apply_overrides(&mut toml_cfg, &args);
    let pipeline_cfg = convert::build_pipeline_config(&toml_cfg)?;

    let input = args
        .input
        .as_ref()
        .or(toml_cfg.points.input.as_ref())
        .ok_or_else(|| anyhow!("no input path: set [points].input in config or use --input"))?;

    info!(path = %input.display(), "reading points");
    let rows = read_points(input)?;
    info!(
        n_points = rows.len(),
        k = pipeline_cfg.pairs().k(),
        top = pipeline_cfg.rank().top_m(),
        mode = ?pipeline_cfg.mode(),
        "points loaded"
    );

    let solution = solve(&rows, &pipeline_cfg)
        .with_context(|| format!("failed to solve for points in {}", input.display()))?;

    print!("{}", render_summary(&solution, args.print_pairs));

    if let Some(ref path) = args.output {
        let json =
            serde_json::to_string_pretty(&solution).context("failed to serialize solution")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write solution: {}", path.display()))?;
        info!(path = %path.display(), "solution written");
    }

    Ok(())
}

/// Applies command-line overrides on top of the file configuration.
fn apply_overrides(cfg: &mut NearlinkConfig, args: &SolveArgs) {
    if let Some(k) = args.k {
        cfg.select.k = k;
    }
    if let Some(top) = args.top {
        cfg.select.top = top;
    }
    if args.streaming {
        cfg.stream.mode = "streaming".to_string();
    }
    if let Some(ref schedule) = args.schedule {
        cfg.stream.schedule = schedule.clone();
    }
}

/// Renders the human-readable summary printed to stdout.
fn render_summary(solution: &Solution, print_pairs: bool) -> String {
    let closest = solution.closest();
    let mut lines = vec![format!(
        "points: {}  candidate pairs: {}  selected: {}",
        closest.n_points(),
        closest.n_candidates(),
        closest.len()
    )];
    if print_pairs {
        lines.extend(
            solution
                .pairs()
                .iter()
                .map(|p| format!("  {:>6} {:>6}  {}", p.i(), p.j(), p.sq_distance())),
        );
    }
    let sizes: Vec<String> = solution.sizes().iter().map(usize::to_string).collect();
    lines.push(format!(
        "components: {}  largest {}: [{}]",
        solution.ranking().n_components(),
        sizes.len(),
        sizes.join(", ")
    ));
    if let Some(ingest) = solution.ingest() {
        lines.push(format!(
            "ingest: {} batches  {} lines  {} padding slots  {} stalls",
            ingest.consumer.batches,
            ingest.consumer.lines,
            ingest.consumer.padding,
            ingest.producer.stalls
        ));
    }
    lines.push(format!("product: {}", solution.product()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn args(input: &Path) -> SolveArgs {
        SolveArgs {
            config: None,
            input: Some(input.to_path_buf()),
            k: None,
            top: None,
            streaming: false,
            schedule: None,
            output: None,
            print_pairs: false,
        }
    }

    fn write(path: &Path, text: &str) {
        std::fs::write(path, text).unwrap();
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut cfg = NearlinkConfig::default();
        let mut a = args(Path::new("points.txt"));
        a.k = Some(7);
        a.top = Some(2);
        a.streaming = true;
        a.schedule = Some("triangular".to_string());
        apply_overrides(&mut cfg, &a);
        assert_eq!(cfg.select.k, 7);
        assert_eq!(cfg.select.top, 2);
        assert_eq!(cfg.stream.mode, "streaming");
        assert_eq!(cfg.stream.schedule, "triangular");
    }

    #[test]
    fn summary_lists_sizes_and_product() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.txt");
        write(&input, "0,0,0\n1,0,0\n0,1,0\n10,10,10\n");
        let cfg_path = dir.path().join("nearlink.toml");
        write(&cfg_path, "[points]\nbit_width = 8\n[select]\nk = 2\ntop = 2\n");

        let toml_cfg = config::load(Some(&cfg_path)).unwrap();
        let pipeline_cfg = convert::build_pipeline_config(&toml_cfg).unwrap();
        let rows = read_points(&input).unwrap();
        let solution = solve(&rows, &pipeline_cfg).unwrap();

        let summary = render_summary(&solution, true);
        assert!(summary.contains("points: 4  candidate pairs: 6  selected: 2"), "{summary}");
        assert!(summary.contains("largest 2: [3, 1]"), "{summary}");
        assert!(summary.ends_with("product: 3\n"), "{summary}");
        assert_eq!(summary.lines().count(), 5);
    }

    #[test]
    fn summary_streaming_includes_ingest_and_full_width_distance() {
        let rows = vec![vec![0u32, 0, 0], vec![u32::MAX; 3]];
        let toml_cfg: NearlinkConfig = toml::from_str(
            r#"
            [points]
            bit_width = 32
            [select]
            k = 1
            top = 1
            [stream]
            mode = "streaming"
            "#,
        )
        .unwrap();
        let pipeline_cfg = convert::build_pipeline_config(&toml_cfg).unwrap();
        let solution = solve(&rows, &pipeline_cfg).unwrap();

        let summary = render_summary(&solution, true);
        let d = u128::from(u32::MAX);
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines.len(), 5, "{summary}");
        assert!(lines[1].ends_with(&(3 * d * d).to_string()), "{summary}");
        assert!(lines[3].starts_with("ingest: 1 batches  1 lines  2 padding slots"), "{summary}");
        assert_eq!(lines[4], "product: 2");
    }

    #[test]
    fn run_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.txt");
        write(&input, "0,0,0\n1,0,0\n\n5,5,5\n6,5,5\n");
        let output = dir.path().join("solution.json");
        let cfg_path = dir.path().join("run.toml");
        write(&cfg_path, "[select]\nk = 2\n");

        let mut a = args(&input);
        a.config = Some(cfg_path);
        a.output = Some(output.clone());
        a.streaming = true;
        run(a).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["ranking"]["product"], 4);
        assert_eq!(json["closest"]["n_points"], 4);
        assert_eq!(json["ingest"]["consumer"]["accepted"], 4);
    }

    #[test]
    fn run_without_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = dir.path().join("empty.toml");
        write(&cfg_path, "");
        let mut a = args(Path::new("unused"));
        a.input = None;
        a.config = Some(cfg_path);
        let err = run(a).unwrap_err();
        assert!(err.to_string().contains("no input path"), "{err}");
    }

    #[test]
    fn run_reports_bad_point() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.txt");
        write(&input, "0,0,0\n1,0\n");
        let cfg_path = dir.path().join("empty.toml");
        write(&cfg_path, "");
        let mut a = args(&input);
        a.config = Some(cfg_path);
        let err = run(a).unwrap_err();
        assert!(
            format!("{err:#}").contains("point 1 has 2 coordinates, expected 3"),
            "{err:#}"
        );
    }
}
