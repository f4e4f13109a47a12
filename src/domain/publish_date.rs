//! Publish date interpretation and the liveness predicate.
//!
//! A record's `publishDate` is free-form JSON. It is read as:
//!
//! - absent, `null`, blank string, `false` or `0` - publish immediately
//! - RFC 3339 timestamp (`2024-06-01T10:00:00+08:00`)
//! - ISO date-time without offset (`2024-06-01T10:00:00`, `2024-06-01 10:00`), taken as UTC
//! - ISO calendar date (`2024-06-01`), reduced forms `2024-06` and `2024`, midnight UTC
//! - slash dates (`2024/06/01`, `2024/06/01 10:00`), taken as UTC
//! - month-name dates (`June 1, 2024`, `Jun 1 2024`, `1 June 2024`), midnight UTC
//! - RFC 2822 (`Sat, 01 Jun 2024 10:00:00 +0000`)
//! - a number of milliseconds since the Unix epoch
//!
//! Anything else is an invalid date. Invalid dates never compare as "passed",
//! so the record stays unpublished.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;

use super::entities::Article;

/// Largest distance from the epoch, in milliseconds, that counts as a date.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Interpreted publish date of an article.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishDate {
    /// No date set; the article is live as soon as it exists.
    Immediate,
    /// Goes live at the given instant.
    At(DateTime<Utc>),
    /// A date is set but cannot be read. Holds the raw value.
    Invalid(Value),
}

/// Where an article stands relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Live,
    Scheduled(DateTime<Utc>),
    InvalidDate,
}

impl PublishDate {
    /// Reads the publish date of an article.
    pub fn of(article: &Article) -> Self {
        match article.publish_date_value() {
            None => Self::Immediate,
            Some(raw) => Self::parse(raw),
        }
    }

    /// Interprets a raw JSON publish date value.
    pub fn parse(raw: &Value) -> Self {
        if is_blank(raw) {
            return Self::Immediate;
        }

        let parsed = match raw {
            Value::String(text) => parse_text(text),
            Value::Number(n) => n.as_f64().and_then(from_epoch_millis),
            _ => None,
        };

        match parsed {
            Some(at) => Self::At(at),
            None => Self::Invalid(raw.clone()),
        }
    }

    /// Returns true if an article with this date is public at `now`.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.status_at(now), ArticleStatus::Live)
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> ArticleStatus {
        match self {
            Self::Immediate => ArticleStatus::Live,
            Self::At(at) if *at <= now => ArticleStatus::Live,
            Self::At(at) => ArticleStatus::Scheduled(*at),
            Self::Invalid(_) => ArticleStatus::InvalidDate,
        }
    }
}

/// Values that count as "no date set": `null`, a blank string, `false` and `0`.
fn is_blank(raw: &Value) -> bool {
    match raw {
        Value::Null | Value::Bool(false) => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(text, format) {
            return Some(at.and_utc());
        }
    }

    let date = NAIVE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| parse_reduced_iso(text));
    if let Some(date) = date {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

/// `YYYY` or `YYYY-MM`, starting on the first day of the period.
fn parse_reduced_iso(text: &str) -> Option<NaiveDate> {
    let (year, month) = match text.split_once('-') {
        Some((year, month)) => (year, Some(month)),
        None => (text, None),
    };

    let all_digits =
        |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(year, 4) {
        return None;
    }

    let month = match month {
        None => 1,
        Some(month) if all_digits(month, 2) => month.parse().ok()?,
        Some(_) => return None,
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}
