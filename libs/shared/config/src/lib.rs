use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_HOSPITAL_API_URL: &str = "http://localhost:3100/api";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_BOOKING_CONFIRMATION_SECONDS: u64 = 5;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_IDLE_SECONDS: u64 = 30 * 60;
pub const DEFAULT_SESSION_SWEEP_SECONDS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hospital_api_url: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub booking_confirmation_seconds: u64,
    pub session_idle_seconds: u64,
    pub session_sweep_seconds: u64,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hospital_api_url: DEFAULT_HOSPITAL_API_URL.to_string(),
            gemini_api_key: String::new(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            booking_confirmation_seconds: DEFAULT_BOOKING_CONFIRMATION_SECONDS,
            session_idle_seconds: DEFAULT_SESSION_IDLE_SECONDS,
            session_sweep_seconds: DEFAULT_SESSION_SWEEP_SECONDS,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            hospital_api_url: env::var("HOSPITAL_API_URL")
                .unwrap_or_else(|_| {
                    warn!("HOSPITAL_API_URL not set, using default");
                    DEFAULT_HOSPITAL_API_URL.to_string()
                }),
            gemini_api_key: env::var("GEMINI_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("GEMINI_API_KEY not set, using empty value");
                    String::new()
                }),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            booking_confirmation_seconds: parse_or_default(
                "BOOKING_CONFIRMATION_SECONDS",
                DEFAULT_BOOKING_CONFIRMATION_SECONDS,
            ),
            session_idle_seconds: parse_or_default("SESSION_IDLE_SECONDS", DEFAULT_SESSION_IDLE_SECONDS),
            session_sweep_seconds: parse_or_default("SESSION_SWEEP_SECONDS", DEFAULT_SESSION_SWEEP_SECONDS),
            port: parse_or_default("PORT", DEFAULT_PORT),
        };

        if !config.is_chat_configured() {
            warn!("Chat assistant not configured - replies will fall back to the apology message");
        }

        config
    }

    pub fn is_chat_configured(&self) -> bool {
        !self.gemini_api_key.is_empty()
            && !self.gemini_base_url.is_empty()
            && !self.gemini_model.is_empty()
    }

    pub fn booking_confirmation_delay(&self) -> Duration {
        Duration::from_secs(self.booking_confirmation_seconds)
    }

    /// How long a page may go without any request before it is unmounted.
    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_seconds)
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_seconds.max(1))
    }
}

fn parse_or_default<T: std::str::FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
