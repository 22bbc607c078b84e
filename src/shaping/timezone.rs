use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

/// Converts stored UTC instants into the display timezone.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    tz: Tz,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Tokyo)
    }
}

impl Normalizer {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Same instant, expressed with the zone's offset in effect at that instant.
    #[must_use]
    pub fn datetime(&self, value: DateTime<Utc>) -> DateTime<FixedOffset> {
        value.with_timezone(&self.tz).fixed_offset()
    }

    #[must_use]
    pub fn optional(&self, value: Option<DateTime<Utc>>) -> Option<DateTime<FixedOffset>> {
        value.map(|v| self.datetime(v))
    }
}

/// A stored row that becomes its display record once its datetime columns
/// (and only those) are converted.
pub trait Normalize {
    type Output;

    fn normalize(self, normalizer: &Normalizer) -> Self::Output;
}

impl<T: Normalize> Normalize for Vec<T> {
    type Output = Vec<T::Output>;

    fn normalize(self, normalizer: &Normalizer) -> Self::Output {
        self.into_iter().map(|row| row.normalize(normalizer)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn tokyo_is_nine_hours_ahead() {
        let utc = Utc.with_ymd_and_hms(2024, 8, 18, 15, 30, 0).unwrap();
        let local = Normalizer::default().datetime(utc);

        assert_eq!(local.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(local.hour(), 0);
        assert_eq!(local.to_rfc3339(), "2024-08-19T00:30:00+09:00");
        assert_eq!(local, utc);
    }

    #[test]
    fn offset_follows_zone_rules_at_the_instant() {
        let normalizer = Normalizer::new(chrono_tz::Europe::Berlin);

        let winter = normalizer.datetime(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        let summer = normalizer.datetime(Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap());

        assert_eq!(winter.offset().local_minus_utc(), 3600);
        assert_eq!(summer.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn optional_passes_none_through() {
        assert!(Normalizer::default().optional(None).is_none());
    }

    #[test]
    fn serializes_with_numeric_offset() {
        let utc = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        let json = serde_json::to_string(&Normalizer::default().datetime(utc)).unwrap();
        assert_eq!(json, "\"2025-01-01T08:00:00+09:00\"");
    }
}
