use std::env;

use crate::dashboard::DisplaySettings;
use crate::error::AppError;
use crate::format::DEFAULT_EXPIRY_THRESHOLD_DAYS;
use crate::geo::DistanceUnit;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub display: DisplaySettings,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let currency = env::var("DISPLAY_CURRENCY").unwrap_or_else(|_| "USD".to_string());
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::Internal(format!(
                "invalid DISPLAY_CURRENCY: {currency:?} is not an ISO 4217 code"
            )));
        }

        let distance_unit = match env::var("DISPLAY_DISTANCE_UNIT").as_deref() {
            Ok("km") => DistanceUnit::Kilometers,
            Ok("mi") | Err(_) => DistanceUnit::Miles,
            Ok(other) => {
                return Err(AppError::Internal(format!(
                    "invalid DISPLAY_DISTANCE_UNIT: {other:?} (expected mi or km)"
                )));
            }
        };

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            display: DisplaySettings {
                currency: currency.to_ascii_uppercase(),
                locale: env::var("DISPLAY_LOCALE").unwrap_or_else(|_| "en-US".to_string()),
                distance_unit,
                expiry_threshold_days: parse_or_default(
                    "EXPIRY_THRESHOLD_DAYS",
                    DEFAULT_EXPIRY_THRESHOLD_DAYS,
                )?,
            },
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_or_default;

    #[test]
    fn unset_keys_use_default() {
        let port: u16 = parse_or_default("FLEETDASH_TEST_UNSET_PORT", 3000).unwrap();
        assert_eq!(port, 3000);
    }
}
