use crate::constants::{
    DEFAULT_API_URL, ENV_API_URL, ENV_END_DATE, ENV_START_DATE, ENV_TICKET, MARKETPLACE_TZ,
    OUTPUT_DATA_PATH, OUTPUT_META_PATH,
};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration with all values filled in (no Options).
///
/// Constructed once at startup from the environment (plus optional CLI flags
/// or a TOML file) and read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Marketplace API access credential
    pub ticket: String,
    /// Daily listing endpoint
    pub api_url: String,
    /// Inclusive window start (start <= end always holds after resolution)
    pub start_date: DateTime<Tz>,
    /// Inclusive window end
    pub end_date: DateTime<Tz>,
    /// Output path for the tender list artifact
    pub data_path: PathBuf,
    /// Output path for the run metadata artifact
    pub meta_path: PathBuf,
}

/// Raw configuration values prior to resolution, regardless of origin
/// (environment, CLI flags, or a TOML file).
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub ticket: Option<String>,
    pub api_url: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub data_path: Option<PathBuf>,
    pub meta_path: Option<PathBuf>,
}

/// Configuration that can be loaded from a TOML file.
///
/// The window pair is required; everything else falls back to the defaults.
/// The ticket deliberately has no file field, credentials only come from the
/// environment. Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Window start in any of the accepted date formats
    pub start: String,
    /// Window end in any of the accepted date formats
    pub end: String,
    /// Overrides the default daily listing endpoint
    #[serde(default)]
    pub api_url: Option<String>,
    /// Overrides the default tender list output path
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    /// Overrides the default metadata output path
    #[serde(default)]
    pub meta_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, `ConfigError` if the
    /// TOML is malformed, required fields are missing, unknown keys are
    /// present, or the window dates are empty strings.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&contents)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config: {e}")))?;

        if config.start.trim().is_empty() || config.end.trim().is_empty() {
            return Err(AppError::ConfigError(
                "start and end must be non-empty dates".into(),
            ));
        }

        Ok(config)
    }
}

impl Config {
    /// Builds the configuration from environment variables, with optional CLI
    /// flag overrides for the window pair (flags win over env values).
    pub fn from_env(start_flag: Option<String>, end_flag: Option<String>) -> AppResult<Self> {
        let sources = ConfigSources {
            ticket: env_var(ENV_TICKET),
            api_url: env_var(ENV_API_URL),
            start: start_flag.or_else(|| env_var(ENV_START_DATE)),
            end: end_flag.or_else(|| env_var(ENV_END_DATE)),
            data_path: None,
            meta_path: None,
        };
        Self::resolve(sources, Utc::now().with_timezone(&MARKETPLACE_TZ))
    }

    /// Builds the configuration from a TOML file plus the environment ticket.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let file = ConfigFile::from_toml_file(path)?;
        let sources = ConfigSources {
            ticket: env_var(ENV_TICKET),
            api_url: file.api_url,
            start: Some(file.start),
            end: Some(file.end),
            data_path: file.data_path,
            meta_path: file.meta_path,
        };
        Self::resolve(sources, Utc::now().with_timezone(&MARKETPLACE_TZ))
    }

    /// Resolves raw source values into a complete configuration.
    ///
    /// The window pair only takes effect when both ends are present;
    /// otherwise it defaults to yesterday through today in the marketplace
    /// timezone. A reversed pair is swapped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the ticket is missing or empty, and
    /// `InvalidInput` if a provided window date matches none of the accepted
    /// formats.
    pub fn resolve(sources: ConfigSources, now: DateTime<Tz>) -> AppResult<Self> {
        let ticket = sources
            .ticket
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::ConfigError(format!("Missing {ENV_TICKET} in environment")))?;

        let api_url = sources
            .api_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let (mut start_date, mut end_date) = match (sources.start.as_deref(), sources.end.as_deref())
        {
            (Some(start), Some(end)) => (parse_window_date(start)?, parse_window_date(end)?),
            _ => default_window(now)?,
        };

        if start_date > end_date {
            std::mem::swap(&mut start_date, &mut end_date);
        }

        Ok(Self {
            ticket,
            api_url,
            start_date,
            end_date,
            data_path: sources
                .data_path
                .unwrap_or_else(|| PathBuf::from(OUTPUT_DATA_PATH)),
            meta_path: sources
                .meta_path
                .unwrap_or_else(|| PathBuf::from(OUTPUT_META_PATH)),
        })
    }
}

/// Parses a window boundary against the three accepted formats: plain date
/// (taken at local midnight), date-time with offset, and date-time without
/// offset (assumed to be in the marketplace timezone).
pub fn parse_window_date(value: &str) -> AppResult<DateTime<Tz>> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return local_day_start(date);
    }

    // Explicit offset: "Z" and "+03:00" via RFC 3339, "+0300" via %z
    if let Ok(dt) = DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
    {
        return Ok(dt.with_timezone(&MARKETPLACE_TZ));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return MARKETPLACE_TZ
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Date '{value}' does not exist in {MARKETPLACE_TZ}"
                ))
            });
    }

    Err(AppError::InvalidInput(format!(
        "Invalid date format: {value}"
    )))
}

/// Default window: yesterday through today at local midnight.
pub fn default_window(now: DateTime<Tz>) -> AppResult<(DateTime<Tz>, DateTime<Tz>)> {
    let today = now.date_naive();
    let yesterday = today
        .pred_opt()
        .ok_or_else(|| AppError::InvalidInput(format!("Date out of range: {today}")))?;
    Ok((local_day_start(yesterday)?, local_day_start(today)?))
}

/// First valid instant of a calendar day. Chile shifts clocks at local
/// midnight, so on spring-forward days the day starts at 01:00.
fn local_day_start(date: NaiveDate) -> AppResult<DateTime<Tz>> {
    for hour in 0..=2 {
        let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) else {
            continue;
        };
        if let Some(dt) = MARKETPLACE_TZ
            .from_local_datetime(&date.and_time(time))
            .earliest()
        {
            return Ok(dt);
        }
    }
    Err(AppError::InvalidInput(format!(
        "No valid start of day for {date} in {MARKETPLACE_TZ}"
    )))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
