use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            navigator: NavigatorConfig::default(),
            ui: UiConfig::default(),
            sections: default_sections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Tuning constants for the section navigator.
///
/// Deltas are in wheel units (a browser reports roughly 100 per notch),
/// momentum in wheel units per millisecond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Buffered magnitude needed before a boundary scroll navigates
    #[serde(default = "default_buffer_threshold")]
    pub buffer_threshold: f64,
    /// Delay between reaching the threshold and navigating, at zero momentum
    #[serde(default = "default_base_delay")]
    pub base_delay_ms: u64,
    /// Floor for the momentum-shortened delay
    #[serde(default = "default_min_delay")]
    pub min_delay_ms: u64,
    /// Wheel deltas below this magnitude are treated as noise
    #[serde(default = "default_min_wheel_delta")]
    pub min_wheel_delta: f64,
    /// Magnitude needed to navigate from a wheel event outside any content region
    #[serde(default = "default_direct_wheel_delta")]
    pub direct_wheel_delta: f64,
    /// Momentum at which the multiplier reaches 2x
    #[serde(default = "default_momentum_threshold")]
    pub momentum_threshold: f64,
    /// Fixed scale applied to every buffered delta
    #[serde(default = "default_velocity_multiplier")]
    pub velocity_multiplier: f64,
    /// Cap for the momentum multiplier
    #[serde(default = "default_max_momentum_multiplier")]
    pub max_momentum_multiplier: f64,
    /// Idle time after which an unfinished buffer is discarded
    #[serde(default = "default_buffer_timeout")]
    pub buffer_timeout_ms: u64,
    /// Minimum horizontal travel for a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    /// Window after a navigation during which further navigations are dropped
    #[serde(default = "default_cooldown")]
    pub cooldown_ms: u64,
    /// Length of the slide transition
    #[serde(default = "default_transition")]
    pub transition_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            buffer_threshold: default_buffer_threshold(),
            base_delay_ms: default_base_delay(),
            min_delay_ms: default_min_delay(),
            min_wheel_delta: default_min_wheel_delta(),
            direct_wheel_delta: default_direct_wheel_delta(),
            momentum_threshold: default_momentum_threshold(),
            velocity_multiplier: default_velocity_multiplier(),
            max_momentum_multiplier: default_max_momentum_multiplier(),
            buffer_timeout_ms: default_buffer_timeout(),
            swipe_threshold: default_swipe_threshold(),
            cooldown_ms: default_cooldown(),
            transition_ms: default_transition(),
        }
    }
}

impl NavigatorConfig {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn buffer_timeout(&self) -> Duration {
        Duration::from_millis(self.buffer_timeout_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Reject values that would make the buffer never fill or divide by zero
    pub fn validate(&self) -> crate::Result<()> {
        let positive = [
            ("buffer_threshold", self.buffer_threshold),
            ("momentum_threshold", self.momentum_threshold),
            ("velocity_multiplier", self.velocity_multiplier),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(crate::Error::Config(format!(
                    "navigator.{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("min_wheel_delta", self.min_wheel_delta),
            ("direct_wheel_delta", self.direct_wheel_delta),
            ("swipe_threshold", self.swipe_threshold),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(crate::Error::Config(format!(
                    "navigator.{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if !(self.max_momentum_multiplier.is_finite() && self.max_momentum_multiplier >= 1.0) {
            return Err(crate::Error::Config(format!(
                "navigator.max_momentum_multiplier must be at least 1.0, got {}",
                self.max_momentum_multiplier
            )));
        }

        if self.min_delay_ms == 0 {
            return Err(crate::Error::Config(
                "navigator.min_delay_ms must be greater than zero".to_string(),
            ));
        }

        if self.min_delay_ms > self.base_delay_ms {
            return Err(crate::Error::Config(format!(
                "navigator.min_delay_ms ({}) exceeds base_delay_ms ({})",
                self.min_delay_ms, self.base_delay_ms
            )));
        }

        Ok(())
    }
}

/// Easing curve for the slide transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump at the end of the transition
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frames per second while a slide is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Wheel delta reported for one terminal scroll notch
    #[serde(default = "default_wheel_delta")]
    pub wheel_delta: f64,
    /// Swipe distance covered by dragging across one terminal column
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    /// Slide transition easing
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            wheel_delta: default_wheel_delta(),
            cell_width: default_cell_width(),
            easing: EasingType::default(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn animation_tick(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }
}

/// One full-width content panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Stable identifier, usable with `folio run --start`
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl SectionConfig {
    fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new(
            "about",
            "About",
            "Systems engineer working on compilers, cryptography and the EVM.\n\n\
             Use the arrow keys, the mouse wheel or a horizontal drag to move between sections.",
        ),
        SectionConfig::new(
            "projects",
            "Projects",
            "smol-EVM\n  A small Ethereum virtual machine written for learning.\n\n\
             merkle-tree-rs\n  Merkle tree construction and inclusion proofs.\n\n\
             codeforces-problemset\n  Solutions to competitive programming problems.",
        ),
        SectionConfig::new(
            "pull-requests",
            "Pull Requests",
            "Recent open source contributions are listed on the project pages.",
        ),
        SectionConfig::new(
            "experience",
            "Experience",
            "Protocol engineering, developer tooling and infrastructure work.",
        ),
        SectionConfig::new(
            "writing",
            "Writing",
            "Notes on zero-knowledge proofs, virtual machines and Rust.",
        ),
        SectionConfig::new(
            "contact",
            "Contact",
            "github.com/Peponks9",
        ),
    ]
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_buffer_threshold() -> f64 {
    300.0
}

fn default_base_delay() -> u64 {
    150
}

fn default_min_delay() -> u64 {
    40
}

fn default_min_wheel_delta() -> f64 {
    50.0 // trackpad noise
}

fn default_direct_wheel_delta() -> f64 {
    100.0
}

fn default_momentum_threshold() -> f64 {
    1.5
}

fn default_velocity_multiplier() -> f64 {
    0.6
}

fn default_max_momentum_multiplier() -> f64 {
    2.0
}

fn default_buffer_timeout() -> u64 {
    400
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_cooldown() -> u64 {
    800
}

fn default_transition() -> u64 {
    600
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_wheel_delta() -> f64 {
    100.0
}

fn default_cell_width() -> f64 {
    8.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.navigator.validate()?;

        if self.sections.is_empty() {
            return Err(crate::Error::Layout(
                "at least one [[sections]] entry is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(crate::Error::Config(format!(
                    "section '{}' has an empty id",
                    section.title
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(crate::Error::Config(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }

        Ok(())
    }

    /// Resolve a section by id or by zero-based index
    pub fn resolve_section(&self, key: &str) -> crate::Result<usize> {
        if let Some(index) = self.sections.iter().position(|s| s.id == key) {
            return Ok(index);
        }
        match key.parse::<usize>() {
            Ok(index) if index < self.sections.len() => Ok(index),
            _ => Err(crate::Error::Layout(format!("unknown section '{}'", key))),
        }
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }
}
