//! Page behaviour configuration.
//!
//! Every field has a default matching the portfolio markup contract, so an
//! empty JSON object (or no configuration at all) yields the stock page
//! behaviour. Field names are camelCase on the wire since the configuration
//! is usually handed over from JavaScript.

use crate::error::{ConfigError, FolioError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolioConfig {
    pub selectors: SelectorConfig,
    pub features: FeatureToggles,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub active_link: ActiveLinkConfig,
    pub parallax: ParallaxConfig,
    pub stats: StatsConfig,
    pub email: EmailConfig,
    pub toast: ToastConfig,
}

impl FolioConfig {
    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: FolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every enabled feature has usable values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.features;
        let s = &self.selectors;

        let selectors: [(bool, &'static str, &str); 9] = [
            (f.smooth_scroll, "selectors.anchors", &s.anchors),
            (f.smooth_scroll, "selectors.navBar", &s.nav_bar),
            (f.reveal, "selectors.revealTargets", &s.reveal_targets),
            (f.active_link, "selectors.sections", &s.sections),
            (f.active_link, "selectors.navLinks", &s.nav_links),
            (f.parallax, "selectors.hero", &s.hero),
            (f.stats, "selectors.statNumbers", &s.stat_numbers),
            (f.stats, "selectors.statsContainer", &s.stats_container),
            (f.email_copy, "selectors.emailLink", &s.email_link),
        ];
        for (enabled, name, selector) in selectors {
            if enabled && selector.trim().is_empty() {
                return Err(ConfigError::EmptySelector(name));
            }
        }

        check_measure("scroll.fallbackNavHeight", self.scroll.fallback_nav_height)?;
        check_measure("scroll.extraOffset", self.scroll.extra_offset)?;

        check_threshold("reveal.threshold", self.reveal.threshold)?;
        check_measure("reveal.bottomMarginPx", self.reveal.bottom_margin_px)?;
        check_measure("reveal.offsetPx", self.reveal.offset_px)?;
        check_measure("reveal.durationSecs", self.reveal.duration_secs)?;
        if self.reveal.easing.trim().is_empty() {
            return Err(ConfigError::EmptyValue("reveal.easing"));
        }

        check_measure("activeLink.lookahead", self.active_link.lookahead)?;
        check_measure("activeLink.topThreshold", self.active_link.top_threshold)?;
        if self.active_link.active_class.trim().is_empty() {
            return Err(ConfigError::EmptyValue("activeLink.activeClass"));
        }

        if !self.parallax.factor.is_finite() {
            return Err(ConfigError::InvalidMeasure {
                field: "parallax.factor",
                value: self.parallax.factor,
            });
        }
        if let Some(max) = self.parallax.max_offset {
            check_measure("parallax.maxOffset", max)?;
        }

        check_threshold("stats.threshold", self.stats.threshold)?;
        if self.stats.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.stats.duration_ms < self.stats.tick_ms {
            return Err(ConfigError::DurationShorterThanTick {
                duration: self.stats.duration_ms,
                tick: self.stats.tick_ms,
            });
        }
        if self.stats.suffix.is_empty() {
            return Err(ConfigError::EmptyValue("stats.suffix"));
        }

        if self.toast.message.is_empty() {
            return Err(ConfigError::EmptyValue("toast.message"));
        }

        Ok(())
    }
}

fn check_threshold(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { field, value })
    }
}

fn check_measure(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMeasure { field, value })
    }
}

/// CSS selectors forming the markup contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    pub anchors: String,
    pub nav_bar: String,
    pub reveal_targets: String,
    pub sections: String,
    pub nav_links: String,
    pub hero: String,
    pub stat_numbers: String,
    pub stats_container: String,
    pub email_link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            anchors: r##"a[href^="#"]"##.to_string(),
            nav_bar: ".nav-bar".to_string(),
            reveal_targets: ".section, .timeline-item, .project-card, .skill-category".to_string(),
            sections: ".section[id]".to_string(),
            nav_links: ".nav-link".to_string(),
            hero: ".hero".to_string(),
            stat_numbers: ".stat-number".to_string(),
            stats_container: ".stats".to_string(),
            email_link: r#"a[href^="mailto:"]"#.to_string(),
        }
    }
}

/// Switches for the individual page behaviours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureToggles {
    pub smooth_scroll: bool,
    pub reveal: bool,
    pub active_link: bool,
    pub parallax: bool,
    pub stats: bool,
    pub email_copy: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            reveal: true,
            active_link: true,
            parallax: true,
            stats: true,
            email_copy: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Used when no nav bar element is present.
    pub fallback_nav_height: f64,
    /// Extra gap left between the nav bar and the scrolled-to element.
    pub extra_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            fallback_nav_height: 70.0,
            extra_offset: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub threshold: f64,
    /// Shrinks the observation root at the bottom edge.
    pub bottom_margin_px: f64,
    /// Initial downward offset of hidden elements.
    pub offset_px: f64,
    pub duration_secs: f64,
    pub easing: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50.0,
            offset_px: 20.0,
            duration_secs: 0.6,
            easing: "ease-out".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActiveLinkConfig {
    /// A section counts as entered this many pixels before its top.
    pub lookahead: f64,
    /// Below this scroll offset the first section is always active.
    pub top_threshold: f64,
    pub active_class: String,
}

impl Default for ActiveLinkConfig {
    fn default() -> Self {
        Self {
            lookahead: 150.0,
            top_threshold: 100.0,
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    pub factor: f64,
    /// Unbounded when `None`.
    pub max_offset: Option<f64>,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            factor: 0.3,
            max_offset: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsConfig {
    pub threshold: f64,
    pub duration_ms: u32,
    pub tick_ms: u32,
    /// Marks a stat as animatable and is re-appended on every frame.
    pub suffix: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            duration_ms: 1500,
            tick_ms: 16,
            suffix: "+".to_string(),
        }
    }
}

/// When the mail client is opened relative to the clipboard write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationPolicy {
    /// Navigate a fixed delay after the click, whatever the clipboard does.
    #[default]
    Unconditional,
    /// Navigate a fixed delay after the clipboard write settles.
    AfterClipboard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailConfig {
    pub navigation: NavigationPolicy,
    pub navigation_delay_ms: u32,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationPolicy::Unconditional,
            navigation_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastConfig {
    pub message: String,
    /// Time between the toast appearing and its exit animation starting.
    pub display_ms: u32,
    /// Length of the exit animation; the node is removed when it ends.
    pub exit_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            message: "Email copied to clipboard!".to_string(),
            display_ms: 2000,
            exit_ms: 300,
        }
    }
}
