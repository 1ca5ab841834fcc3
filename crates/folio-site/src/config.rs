use std::fs;
use std::path::Path;

use folio_core::{FolioError, Result, Size};
use folio_i18n::Language;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Tunables for the site. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Added to the scroll offset before looking up the active section.
    pub probe_offset: f32,
    pub splash_delay_ms: u64,
    pub rotator_period_ms: u64,
    /// Fraction of a section that must be on screen before it animates in.
    pub visibility_threshold: f32,
    /// Scroll offset past which the nav bar switches to its compact style.
    pub scrolled_threshold: f32,
    pub viewport: Size,
    pub smooth_scroll_ms: u64,
    pub language: Language,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            probe_offset: 100.0,
            splash_delay_ms: 2000,
            rotator_period_ms: 3000,
            visibility_threshold: 0.1,
            scrolled_threshold: 50.0,
            viewport: Size::new(1280.0, 800.0),
            smooth_scroll_ms: 600,
            language: Language::En,
        }
    }
}

impl SiteConfig {
    /// Reads a TOML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("{} not found, using default config", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| FolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| {
            log::warn!("rejected config: {msg}");
            Err(FolioError::Config(msg))
        };
        if self.rotator_period_ms == 0 {
            return fail("rotator_period_ms must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return fail(format!(
                "visibility_threshold {} is outside [0, 1]",
                self.visibility_threshold
            ));
        }
        if self.probe_offset < 0.0 || !self.probe_offset.is_finite() {
            return fail(format!("probe_offset {} must be >= 0", self.probe_offset));
        }
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return fail(format!(
                "viewport {}x{} must be non-empty",
                self.viewport.width, self.viewport.height
            ));
        }
        Ok(())
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn rotator_period(&self) -> Duration {
        Duration::from_millis(self.rotator_period_ms)
    }

    pub fn smooth_scroll(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = SiteConfig::from_toml(
            r#"
            language = "fr"
            splash_delay_ms = 500

            [viewport]
            width = 390.0
            height = 844.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.language, Language::Fr);
        assert_eq!(cfg.splash_delay(), Duration::from_millis(500));
        assert_eq!(cfg.viewport, Size::new(390.0, 844.0));
        assert_eq!(cfg.probe_offset, 100.0);
        assert_eq!(cfg.rotator_period(), Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SiteConfig::from_toml("rotator_period_ms = 0").is_err());
        assert!(SiteConfig::from_toml("visibility_threshold = 1.5").is_err());
        assert!(SiteConfig::from_toml("probe_offset = -1.0").is_err());
        assert!(SiteConfig::from_toml("language = \"de\"").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let cfg = SiteConfig::load("/nonexistent/folio.toml").unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }
}
