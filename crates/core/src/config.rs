use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `CAMPAIGN_STUDIO__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_org_name")]
    pub org_name: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub studio: StudioConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

/// Settings for the AI Campaign Studio conversation engine.
#[derive(Debug, Clone, Deserialize)]
pub struct StudioConfig {
    /// Maximum number of concurrently held chat sessions before the
    /// oldest are evicted.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    /// Multiplier applied to every scripted step delay. Useful for demos
    /// (slow down) and smoke tests (speed up). 1.0 = authored pacing.
    #[serde(default = "default_delay_scale")]
    pub delay_scale: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Number of days of daily-trend history to generate.
    #[serde(default = "default_trend_days")]
    pub trend_days: u32,
    /// Assumed average order value used to derive revenue figures.
    #[serde(default = "default_avg_order_value")]
    pub avg_order_value: f64,
}

// Default functions
fn default_org_name() -> String {
    "Berghaus UK".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_max_sessions() -> usize {
    256
}
fn default_delay_scale() -> f64 {
    1.0
}
fn default_trend_days() -> u32 {
    30
}
fn default_avg_order_value() -> f64 {
    85.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            org_name: default_org_name(),
            api: ApiConfig::default(),
            studio: StudioConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            delay_scale: default_delay_scale(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trend_days: default_trend_days(),
            avg_order_value: default_avg_order_value(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("CAMPAIGN_STUDIO")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.api.http_port, 8080);
        assert_eq!(config.studio.delay_scale, 1.0);
        assert_eq!(config.analytics.trend_days, 30);
    }
}
