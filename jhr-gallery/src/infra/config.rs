//! Gallery configuration
//!
//! Tunables for the carousel and the filter panel. Every field has a
//! compiled default from [`crate::infra::constants`]; files and environment
//! variables only need to name what they override.

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, anyhow, ensure};
use serde::{Deserialize, Serialize};

use crate::infra::constants::{carousel, listings};

/// Source that produced the gallery configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Interval between autoplay advances (ms). Must be positive.
    pub autoplay_interval_ms: u64,
    /// Horizontal travel (px) below which a pointer-up is a tap, not a swipe.
    pub swipe_threshold_px: f32,
    /// Responsive sizing hint applied to inline slides when the mounting
    /// page does not supply one.
    pub image_sizes: String,
    /// Quiet period (ms) after the last filter edit before the URL is
    /// replaced.
    pub filter_debounce_ms: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: carousel::autoplay::INTERVAL_MS,
            swipe_threshold_px: carousel::gesture::SWIPE_THRESHOLD_PX,
            image_sizes: carousel::presentation::DEFAULT_IMAGE_SIZES.to_owned(),
            filter_debounce_ms: listings::filters::URL_DEBOUNCE_MS,
        }
    }
}

impl GalleryConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.autoplay_interval_ms > 0,
            "autoplay_interval_ms must be greater than zero"
        );
        ensure!(
            self.swipe_threshold_px.is_finite() && self.swipe_threshold_px >= 0.0,
            "swipe_threshold_px must be a non-negative number, got {}",
            self.swipe_threshold_px
        );
        Ok(())
    }

    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$GALLERY_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$GALLERY_CONFIG_JSON` (inline JSON),
    /// 3) a well-known file in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, GalleryConfigSource)> {
        if let Ok(path_str) = env::var("GALLERY_CONFIG_PATH")
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, GalleryConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var("GALLERY_CONFIG_JSON")
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .context("failed to parse GALLERY_CONFIG_JSON")?;
            parsed.validate()?;
            return Ok((parsed, GalleryConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, GalleryConfigSource::File(path)));
        }

        Ok((Self::default(), GalleryConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read gallery config from {}", path.display())
        })?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str())
        {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid gallery config {}", path.display())
            })?,
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid gallery config {}: {}",
                        path.display(),
                        err
                    )
                })?
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };

        config.validate().with_context(|| {
            format!("invalid gallery config {}", path.display())
        })?;
        Ok(config)
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse gallery config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid gallery config json: {err}"))
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "gallery.toml",
            "gallery.json",
            "config/gallery.toml",
            "config/gallery.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_constants() {
        let cfg = GalleryConfig::default();
        assert_eq!(cfg.autoplay_interval(), Duration::from_millis(3_000));
        assert_eq!(cfg.swipe_threshold_px, 50.0);
        assert_eq!(cfg.filter_debounce(), Duration::from_millis(200));
        assert_eq!(cfg.image_sizes, "(min-width: 768px) 66vw, 100vw");
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = GalleryConfig::parse_from_str("autoplay_interval_ms = 5000\n", "inline")
            .unwrap();
        assert_eq!(cfg.autoplay_interval_ms, 5_000);
        assert_eq!(cfg.swipe_threshold_px, 50.0);
    }

    #[test]
    fn untyped_contents_fall_back_to_json() {
        let cfg = GalleryConfig::parse_from_str(r#"{"swipe_threshold_px": 30.0}"#, "inline")
            .unwrap();
        assert_eq!(cfg.swipe_threshold_px, 30.0);
        assert!(GalleryConfig::parse_from_str("{{ nope", "inline").is_err());
    }

    #[test]
    fn file_loading_validates() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "autoplay_interval_ms = 0").unwrap();
        let err = GalleryConfig::load_from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("autoplay_interval_ms"));

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{"filter_debounce_ms": 350}}"#).unwrap();
        let cfg = GalleryConfig::load_from_file(file.path()).unwrap();
        assert_eq!(cfg.filter_debounce_ms, 350);
    }
}
