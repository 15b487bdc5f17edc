use std::time::Duration;

use anyhow::{Context, Result};

/// Origins allowed when `ALLOWED_ORIGINS` is not set.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://resu-match-ai-three.vercel.app",
    "http://localhost:3000",
    "http://localhost:3001",
];

/// Sampling parameters forwarded with every text-generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 8192,
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub generation: GenerationConfig,
    pub allowed_origins: Vec<String>,
    pub debug: bool,
    pub max_retries: u32,
    pub pdflatex_bin: String,
    pub latex_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            generation: GenerationConfig::default(),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| {
                    DEFAULT_ALLOWED_ORIGINS
                        .iter()
                        .map(|s| s.to_string())
                        .collect()
                }),
            debug: std::env::var("DEBUG")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            max_retries: parse_env("MAX_RETRIES", 3)?,
            pdflatex_bin: std::env::var("PDFLATEX_BIN").unwrap_or_else(|_| "pdflatex".to_string()),
            latex_timeout: Duration::from_secs(parse_env("LATEX_TIMEOUT_SECS", 60)?),
            port: parse_env("PORT", 5001)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        let origins = parse_origins(" https://a.example , ,http://localhost:3000,");
        assert_eq!(origins, vec!["https://a.example", "http://localhost:3000"]);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_generation_defaults() {
        let g = GenerationConfig::default();
        assert_eq!(g.top_k, 40);
        assert_eq!(g.max_output_tokens, 8192);
        assert!((g.temperature - 0.3).abs() < f32::EPSILON);
    }
}
