use chrono::TimeDelta;

/// How long ago something happened, parsed from a human label such as
/// "5 minutes ago" or "2 days ago".
///
/// Fixture items only carry display strings for their publication time;
/// this turns them into a comparable age so that date ordering is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Recency(TimeDelta);

impl Recency {
    /// Parses a relative time label. Returns `None` for labels that do not
    /// follow the `<count> <unit> ago` shape (or "just now").
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        if normalized == "just now" || normalized == "now" {
            return Some(Self(TimeDelta::zero()));
        }

        let body = normalized.strip_suffix("ago")?.trim_end();
        let mut parts = body.split_whitespace();
        let count = match parts.next()? {
            "a" | "an" => 1,
            digits if digits.bytes().all(|b| b.is_ascii_digit()) => {
                i64::from(digits.parse::<u32>().ok()?)
            }
            _ => return None,
        };
        let unit = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let delta = match unit.trim_end_matches('s') {
            "second" | "sec" => TimeDelta::try_seconds(count),
            "minute" | "min" => TimeDelta::try_minutes(count),
            "hour" | "hr" => TimeDelta::try_hours(count),
            "day" => TimeDelta::try_days(count),
            "week" => TimeDelta::try_weeks(count),
            "month" => count.checked_mul(30).and_then(TimeDelta::try_days),
            "year" => count.checked_mul(365).and_then(TimeDelta::try_days),
            _ => None,
        }?;

        Some(Self(delta))
    }

    pub fn age(&self) -> TimeDelta {
        self.0
    }
}
