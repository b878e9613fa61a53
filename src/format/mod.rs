//! Display formatting for raw backend values. Every formatter degrades to
//! [`SENTINEL`] instead of failing.

pub mod number;
pub mod pattern;
pub mod text;
pub mod time;

pub use crate::error::SENTINEL;
pub use number::{
    Locale, NumberOptions, WeightUnit, format_currency, format_distance, format_number,
    format_percentage, format_weight,
};
pub use text::{format_phone_number, get_initials, slugify, truncate_text};
pub use time::{
    DEFAULT_EXPIRY_THRESHOLD_DAYS, DateInput, format_date, format_date_time, format_time,
    format_time_ago, format_time_ago_with, is_date_expired, is_date_expired_with,
    is_date_expiring, is_date_expiring_with,
};
