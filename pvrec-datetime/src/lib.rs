//! UTC <-> Modified Julian Date conversion.
//!
//! No process-wide state: every function takes its input and returns its
//! output, so independent batches (and tests) never interfere with each
//! other.

use chrono::NaiveDate;

/// Modified Julian Date epoch: 1858-11-17 00:00 UT.
fn mjd_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1858, 11, 17).expect("valid epoch date")
}

/// Convert a UTC calendar timestamp plus microseconds to Modified Julian
/// Date, applying the mean-of-exposure convention: the recorded timestamp
/// is the start of the exposure, so 5 seconds are added to reach the
/// exposure midpoint.
pub fn utc_to_mjd(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, micros: u32) -> f64 {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date");
    let day_count = date.signed_duration_since(mjd_epoch()).num_days() as f64;

    let secs_of_day =
        hour as f64 * 3600.0 + minute as f64 * 60.0 + second as f64 + micros as f64 * 1e-6 + 5.0;

    day_count + secs_of_day / 86_400.0
}

/// Convert a Modified Julian Date back to a UTC calendar timestamp:
/// `(year, month, day, hour, minute, seconds_with_fraction)`.
pub fn mjd_to_calendar(mjd: f64) -> (i32, u32, u32, u32, u32, f64) {
    use chrono::Datelike;

    let day_count = mjd.floor();
    let frac_day = mjd - day_count;

    let date = mjd_epoch() + chrono::Duration::days(day_count as i64);

    let mut secs_total = frac_day * 86_400.0;
    // Guard against floating point drift pushing us just past midnight.
    if secs_total >= 86_400.0 {
        secs_total -= 86_400.0;
    }
    let hour = (secs_total / 3600.0).floor() as u32;
    let minute = ((secs_total - hour as f64 * 3600.0) / 60.0).floor() as u32;
    let seconds = secs_total - hour as f64 * 3600.0 - minute as f64 * 60.0;

    (date.year(), date.month(), date.day(), hour, minute, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn epoch_is_zero() {
        // 1858-11-17 00:00:00 UT minus the +5s mean-of-exposure offset
        // should land just before the integer epoch.
        let mjd = utc_to_mjd(1858, 11, 16, 23, 59, 55, 0);
        assert_relative_eq!(mjd, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn roundtrip() {
        let mjd = utc_to_mjd(2019, 2, 13, 12, 30, 0, 500_000);
        let (y, mo, d, h, mi, s) = mjd_to_calendar(mjd);
        assert_eq!((y, mo, d), (2019, 2, 13));
        assert_eq!(h, 12);
        assert_eq!(mi, 30);
        // The +5s mean-of-exposure offset was baked into `mjd`.
        assert_relative_eq!(s, 5.5, epsilon = 1e-6);
    }

    #[test]
    fn monotonic_with_day_rollover() {
        let a = utc_to_mjd(2020, 1, 1, 23, 59, 58, 0);
        let b = utc_to_mjd(2020, 1, 2, 0, 0, 1, 0);
        assert!(b > a);
    }
}
