//! Tunable toolbar constants.
//!
//! Defaults reproduce the stock look. On native targets a `toolbar.json` in
//! the platform config directory may override any subset of fields, e.g.
//!
//! ```json
//! { "spring": { "stiffness": 220 }, "dim_opacity": 0.4 }
//! ```
//!
//! Platforms call `install(load())` once before rendering; components read the
//! result through `current()`.

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::core::geometry::HighlightPadding;
use crate::core::spring::SpringParams;

pub const CONFIG_FILENAME: &str = "toolbar.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toolbar config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid toolbar config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Spring driving the highlight pill and tooltips.
    pub spring: SpringParams,
    pub padding: HighlightPadding,
    /// Opacity of labels for items other than the hovered one.
    pub dim_opacity: f64,
    pub dim_blur_px: f64,
    pub icon_size_px: u32,
    /// Per-slot rotation / vertical shift of the fanned label rows.
    pub tilt_deg: f64,
    pub tilt_px: f64,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            spring: SpringParams::default(),
            padding: HighlightPadding::default(),
            dim_opacity: 0.3,
            dim_blur_px: 2.0,
            icon_size_px: 28,
            tilt_deg: 6.0,
            tilt_px: 5.0,
        }
    }
}

impl ToolbarConfig {
    /// Rejects values the spring solver or the label styling cannot use.
    /// A zero mass or stiffness makes every spring position NaN, and an
    /// undamped or NaN spring never comes to rest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spring = &self.spring;
        if !(spring.stiffness.is_finite() && spring.stiffness > 0.0) {
            return Err(invalid("spring.stiffness", spring.stiffness, "must be > 0"));
        }
        if !(spring.mass.is_finite() && spring.mass > 0.0) {
            return Err(invalid("spring.mass", spring.mass, "must be > 0"));
        }
        if !(spring.damping.is_finite() && spring.damping > 0.0) {
            return Err(invalid("spring.damping", spring.damping, "must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.dim_opacity) {
            return Err(invalid("dim_opacity", self.dim_opacity, "must be within 0..=1"));
        }
        if !(self.dim_blur_px.is_finite() && self.dim_blur_px >= 0.0) {
            return Err(invalid("dim_blur_px", self.dim_blur_px, "must be >= 0"));
        }
        let finite = [
            ("padding.dx", self.padding.dx),
            ("padding.dy", self.padding.dy),
            ("padding.dw", self.padding.dw),
            ("padding.dh", self.padding.dh),
            ("tilt_deg", self.tilt_deg),
            ("tilt_px", self.tilt_px),
        ];
        if let Some((field, value)) = finite.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(field, value, "must be finite"));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: f64, rule: &str) -> ConfigError {
    ConfigError::Invalid(format!("{field} = {value} {rule}"))
}

pub fn parse(src: &str) -> Result<ToolbarConfig, ConfigError> {
    let cfg: ToolbarConfig = serde_json::from_str(src)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the user override if present, falling back to defaults.
pub fn load() -> ToolbarConfig {
    match load_user_file() {
        Ok(Some(cfg)) => {
            tracing::info!("loaded toolbar config override");
            cfg
        }
        Ok(None) => ToolbarConfig::default(),
        Err(err) => {
            tracing::warn!(%err, "ignoring toolbar config; using defaults");
            ToolbarConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_user_file() -> Result<Option<ToolbarConfig>, ConfigError> {
    let Some(dirs) = directories::ProjectDirs::from("dev", "hoverdock", "hoverdock") else {
        return Ok(None);
    };
    let path = dirs.config_dir().join(CONFIG_FILENAME);
    match std::fs::read_to_string(&path) {
        Ok(src) => parse(&src).map(Some),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

#[cfg(target_arch = "wasm32")]
fn load_user_file() -> Result<Option<ToolbarConfig>, ConfigError> {
    Ok(None)
}

static CONFIG: OnceCell<ToolbarConfig> = OnceCell::new();

/// Register the process-wide config. Later calls are ignored.
pub fn install(config: ToolbarConfig) {
    let _ = CONFIG.set(config);
}

/// Installed config, or defaults if the platform never installed one.
pub fn current() -> &'static ToolbarConfig {
    CONFIG.get_or_init(ToolbarConfig::default)
}
