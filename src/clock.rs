//! Wall-clock source fixed to Asia/Dhaka (UTC+6).

use std::num::TryFromIntError;

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

use crate::GregorianDate;
use crate::consts::DHAKA_UTC_OFFSET_SECS;
use crate::convert::ConversionError;
use crate::format::{GregorianTime, LocalMoment};
use crate::types::Meridian;

/// The Asia/Dhaka offset. Bangladesh does not observe DST.
pub const DHAKA: FixedOffset = match FixedOffset::east_opt(DHAKA_UTC_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("UTC+6 is a valid offset"),
};

/// Source of the current instant.
pub trait Clock {
    /// Current instant, expressed in [`DHAKA`] time.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&DHAKA)
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    /// Instants in other offsets are shifted to Dhaka time.
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant.with_timezone(&DHAKA))
    }

    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant.with_timezone(&DHAKA))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

impl TryFrom<DateTime<FixedOffset>> for LocalMoment {
    type Error = ConversionError;

    /// Reads the calendar date and 12-hour time in the instant's own offset.
    fn try_from(instant: DateTime<FixedOffset>) -> Result<Self, Self::Error> {
        let out_of_range =
            |_: TryFromIntError| ConversionError::ClockOutOfRange(instant.to_rfc3339());

        let year = u16::try_from(instant.year()).map_err(out_of_range)?;
        let month = u8::try_from(instant.month()).map_err(out_of_range)?;
        let day = u8::try_from(instant.day()).map_err(out_of_range)?;
        let (is_pm, hour) = instant.hour12();
        let hour = u8::try_from(hour).map_err(out_of_range)?;
        let minute = u8::try_from(instant.minute()).map_err(out_of_range)?;

        let date = GregorianDate::new(year, month, day)?;
        let time = GregorianTime::new(hour, minute, Meridian::from_is_pm(is_pm))?;
        Ok(Self::new(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_dhaka_offset() {
        assert_eq!(DHAKA.local_minus_utc(), 6 * 60 * 60);
    }

    #[test]
    fn test_system_clock_is_in_dhaka() {
        assert_eq!(SystemClock.now().offset(), &DHAKA);
    }

    #[test]
    fn test_fixed_clock_shifts_to_dhaka() {
        let utc_midnight = Utc.with_ymd_and_hms(2025, 4, 13, 18, 0, 0).unwrap();
        let clock = FixedClock::from_utc(utc_midnight);
        let now = clock.now();
        assert_eq!(now.offset(), &DHAKA);
        assert_eq!((now.day(), now.hour()), (14, 0));

        let utc_plus_one = FixedOffset::east_opt(3600).unwrap();
        let clock = FixedClock::new(utc_plus_one.with_ymd_and_hms(2025, 4, 14, 3, 0, 0).unwrap());
        assert_eq!(clock.now().hour(), 8);
    }

    #[test]
    fn test_local_moment_from_instant() {
        let cases = [
            ((0, 5), (12, 5, Meridian::Am)),
            ((9, 5), (9, 5, Meridian::Am)),
            ((12, 0), (12, 0, Meridian::Pm)),
            ((21, 59), (9, 59, Meridian::Pm)),
        ];
        for ((h24, min), (h12, expected_min, meridian)) in cases {
            let instant = DHAKA.with_ymd_and_hms(2025, 4, 14, h24, min, 0).unwrap();
            let moment = LocalMoment::try_from(instant).unwrap();
            assert_eq!(moment.date(), GregorianDate::new(2025, 4, 14).unwrap());
            assert_eq!(
                moment.time(),
                GregorianTime::new(h12, expected_min, meridian).unwrap(),
                "{h24:02}:{min:02}"
            );
        }
    }

    #[test]
    fn test_local_moment_rejects_years_outside_range() {
        let instant = DHAKA.with_ymd_and_hms(-5, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            LocalMoment::try_from(instant),
            Err(ConversionError::ClockOutOfRange(_))
        ));
        let instant = DHAKA.with_ymd_and_hms(10_000, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            LocalMoment::try_from(instant),
            Err(ConversionError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = FixedClock::from_utc(Utc.with_ymd_and_hms(2025, 4, 14, 0, 0, 0).unwrap());
        fn read<C: Clock>(clock: C) -> DateTime<FixedOffset> {
            clock.now()
        }
        assert_eq!(read(&clock), clock.now());
        assert_eq!(read(&SystemClock).offset(), &DHAKA);
    }
}
