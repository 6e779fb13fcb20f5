//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use nearlink_components::RankConfig;
use nearlink_pairs::PairConfig;
use nearlink_pipeline::{Mode, PipelineConfig};
use nearlink_stream::{Schedule, StreamConfig};

/// Parses a line schedule name string into the corresponding enum variant.
pub fn parse_schedule(s: &str) -> Result<Schedule> {
    match s.to_lowercase().as_str() {
        "points" => Ok(Schedule::Points),
        "triangular" => Ok(Schedule::Triangular),
        other => bail!("unknown schedule: {other:?}"),
    }
}

/// Parses an execution mode name string into the corresponding enum variant.
pub fn parse_mode(s: &str) -> Result<Mode> {
    match s.to_lowercase().as_str() {
        "batch" => Ok(Mode::Batch),
        "streaming" => Ok(Mode::Streaming),
        other => bail!("unknown mode: {other:?}"),
    }
}

/// Builds a [`PairConfig`] from the TOML point and selection configuration.
pub fn build_pair_config(points: &PointsToml, select: &SelectToml) -> PairConfig {
    PairConfig::new(select.k)
        .with_dims(points.dims)
        .with_bit_width(points.bit_width)
}

/// Builds a [`RankConfig`] from the TOML selection configuration.
pub fn build_rank_config(select: &SelectToml) -> RankConfig {
    RankConfig::new(select.top)
}

/// Builds a [`StreamConfig`] from the TOML stream configuration.
pub fn build_stream_config(stream: &StreamToml) -> Result<StreamConfig> {
    let schedule = parse_schedule(&stream.schedule)?;
    Ok(StreamConfig::new(stream.batch_size)
        .with_capacity(stream.capacity)
        .with_schedule(schedule))
}

/// Builds a validated [`PipelineConfig`] from the full TOML configuration.
pub fn build_pipeline_config(config: &NearlinkConfig) -> Result<PipelineConfig> {
    let mode = parse_mode(&config.stream.mode)?;
    let mut cfg = PipelineConfig::new(
        build_pair_config(&config.points, &config.select),
        build_rank_config(&config.select),
    )
    .with_stream(build_stream_config(&config.stream)?)
    .with_mode(mode);
    if let Some(n) = config.points.count {
        cfg = cfg.with_expected_points(n);
    }
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_schedule_names() {
        assert_eq!(parse_schedule("points").unwrap(), Schedule::Points);
        assert_eq!(parse_schedule("Triangular").unwrap(), Schedule::Triangular);
        let err = parse_schedule("diagonal").unwrap_err();
        assert_eq!(err.to_string(), "unknown schedule: \"diagonal\"");
    }

    #[test]
    fn parse_mode_names() {
        assert_eq!(parse_mode("batch").unwrap(), Mode::Batch);
        assert_eq!(parse_mode("STREAMING").unwrap(), Mode::Streaming);
        assert!(parse_mode("eager").is_err());
    }

    #[test]
    fn default_pipeline_config() {
        let cfg = build_pipeline_config(&NearlinkConfig::default()).unwrap();
        assert_eq!(cfg.pairs().k(), 1000);
        assert_eq!(cfg.pairs().dims(), 3);
        assert_eq!(cfg.pairs().bit_width(), 24);
        assert_eq!(cfg.rank().top_m(), 3);
        assert_eq!(cfg.stream().batch_size(), 4);
        assert_eq!(cfg.stream().schedule(), Schedule::Points);
        assert_eq!(cfg.mode(), Mode::Batch);
        assert_eq!(cfg.expected_points(), None);
    }

    #[test]
    fn full_pipeline_config() {
        let toml_cfg: NearlinkConfig = toml::from_str(
            r#"
            [points]
            count = 1000
            dims = 2
            bit_width = 16

            [select]
            k = 50
            top = 4

            [stream]
            mode = "streaming"
            batch_size = 8
            capacity = 2
            schedule = "triangular"
            "#,
        )
        .unwrap();
        let cfg = build_pipeline_config(&toml_cfg).unwrap();
        assert_eq!(cfg.pairs().k(), 50);
        assert_eq!(cfg.pairs().dims(), 2);
        assert_eq!(cfg.rank().top_m(), 4);
        assert_eq!(cfg.stream().capacity(), 2);
        assert_eq!(cfg.stream().schedule(), Schedule::Triangular);
        assert_eq!(cfg.mode(), Mode::Streaming);
        assert_eq!(cfg.expected_points(), Some(1000));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let mut toml_cfg = NearlinkConfig::default();
        toml_cfg.points.bit_width = 33;
        let err = build_pipeline_config(&toml_cfg).unwrap_err();
        assert!(err.to_string().contains("bit_width"), "{err}");

        let mut toml_cfg = NearlinkConfig::default();
        toml_cfg.select.top = 0;
        assert!(build_pipeline_config(&toml_cfg).is_err());
    }
}
