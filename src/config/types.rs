use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
}

/// Round and scoring parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Number of options shown per round (default: 4).
    #[serde(default = "default_option_count")]
    pub option_count: usize,
    /// Points awarded for a correct answer; half of this is deducted
    /// for a wrong one (default: 10).
    #[serde(default = "default_points_on_correct")]
    pub points_on_correct: i64,
    /// Pause before a new question is shown, in milliseconds (default: 3000).
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,
}

/// Country API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Base URL of the GeoNames API (default: "http://api.geonames.org").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// GeoNames account name sent with every request (default: "demo").
    #[serde(default = "default_username")]
    pub username: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_option_count() -> usize {
    4
}

fn default_points_on_correct() -> i64 {
    10
}

fn default_pacing_delay_ms() -> u64 {
    3000
}

fn default_base_url() -> String {
    "http://api.geonames.org".to_string()
}

fn default_username() -> String {
    "demo".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            option_count: 4,
            points_on_correct: 10,
            pacing_delay_ms: 3000,
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: default_username(),
            timeout_seconds: 30,
            connect_timeout_seconds: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz: QuizSettings::default(),
            provider: ProviderSettings::default(),
        }
    }
}
