// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Time left until the wedding, decomposed into whole days, remaining whole
/// hours, and remaining whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
    };
}

/// The wedding date is a calendar date taken as midnight UTC, matching how
/// the planner stores it. A date in the past or an unparseable string both
/// read as all zeros.
#[must_use]
pub fn countdown_to(wedding_date: &str, now: DateTime<Utc>) -> Countdown {
    let Some(target) = parse_wedding_date(wedding_date) else {
        return Countdown::ZERO;
    };
    let left = target - now;
    if left <= Duration::zero() {
        return Countdown::ZERO;
    }
    Countdown {
        days: left.num_days() as u64,
        hours: (left.num_hours() % 24) as u64,
        minutes: (left.num_minutes() % 60) as u64,
    }
}

fn parse_wedding_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|stamp| stamp.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn decomposes_days_hours_minutes() {
        let now = at(2024, 6, 1, 11, 30);
        assert_eq!(
            countdown_to("2024-06-15", now),
            Countdown {
                days: 13,
                hours: 12,
                minutes: 30
            }
        );
    }

    #[test]
    fn past_date_reads_all_zero() {
        let now = at(2024, 7, 1, 0, 0);
        assert_eq!(countdown_to("2024-06-15", now), Countdown::ZERO);
    }

    #[test]
    fn the_wedding_morning_reads_zero() {
        // Midnight of the day itself: diff is exactly zero.
        let now = at(2024, 6, 15, 0, 0);
        assert_eq!(countdown_to("2024-06-15", now), Countdown::ZERO);
    }

    #[test]
    fn unparseable_date_reads_all_zero() {
        let now = at(2024, 6, 1, 0, 0);
        assert_eq!(countdown_to("next summer", now), Countdown::ZERO);
    }

    #[test]
    fn rfc3339_timestamps_are_accepted() {
        let now = at(2024, 6, 14, 22, 0);
        assert_eq!(
            countdown_to("2024-06-15T00:00:00Z", now),
            Countdown {
                days: 0,
                hours: 2,
                minutes: 0
            }
        );
    }
}
