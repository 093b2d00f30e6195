#[cfg(test)]
mod date_lut_tests {
    use crate::calendar::Calendar;
    use crate::date_lut::DateLut;
    use crate::{DATE_LUT_FIRST_DAY_NUM, DATE_LUT_LAST_INDEX};

    // ============================================================================
    // DAY NUMBERS
    // ============================================================================

    #[test]
    fn test_days_since_epoch() {
        assert_eq!(DateLut::days_since_epoch(1970, 1, 1), 0);
        assert_eq!(DateLut::days_since_epoch(1969, 12, 31), -1);
        assert_eq!(DateLut::days_since_epoch(1900, 1, 1), DATE_LUT_FIRST_DAY_NUM);
        assert_eq!(DateLut::days_since_epoch(2023, 2, 28), 19416);
        assert_eq!(DateLut::days_since_epoch(2149, 6, 6), 65535);
        assert_eq!(
            DateLut::days_since_epoch(2299, 12, 31),
            DATE_LUT_FIRST_DAY_NUM + DATE_LUT_LAST_INDEX
        );
    }

    #[test]
    fn test_leap_years() {
        assert!(DateLut::is_leap_year(2000));
        assert!(DateLut::is_leap_year(2024));
        assert!(!DateLut::is_leap_year(1900));
        assert!(!DateLut::is_leap_year(2023));
        assert_eq!(DateLut::days_in_month(2024, 2), 29);
        assert_eq!(DateLut::days_in_month(2100, 2), 28);
        assert_eq!(DateLut::days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_make_day_num() {
        let lut = DateLut::utc();
        assert_eq!(lut.make_day_num(2023, 2, 28), 19416);
        assert_eq!(lut.make_day_num(1970, 1, 1), 0);
        assert_eq!(lut.make_day_num(1900, 1, 1), -25567);
        assert_eq!(lut.make_day_num(2299, 12, 31), 120529);
    }

    #[test]
    fn test_make_day_num_out_of_range() {
        let lut = DateLut::utc();
        assert_eq!(lut.make_day_num(1899, 12, 31), 0);
        assert_eq!(lut.make_day_num(2023, 0, 1), 0);
        assert_eq!(lut.make_day_num(2023, 13, 1), 0);
        assert_eq!(lut.make_day_num(2023, 1, 0), 0);
        assert_eq!(lut.make_day_num(2023, 1, 32), 0);
        // Past the last year saturates to the last day.
        assert_eq!(lut.make_day_num(2300, 1, 1), 120529);
        assert_eq!(lut.make_day_num(2299, 12, 31), lut.make_day_num(9999, 1, 1));
    }

    #[test]
    fn test_make_day_num_rolls_over_month_end() {
        let lut = DateLut::utc();
        // 2023-02-31 is 2023-03-03.
        assert_eq!(lut.make_day_num(2023, 2, 31), lut.make_day_num(2023, 3, 3));
        // 2024 is a leap year: 2024-02-31 is 2024-03-02.
        assert_eq!(lut.make_day_num(2024, 2, 31), lut.make_day_num(2024, 3, 2));
    }

    // ============================================================================
    // SECONDS SINCE EPOCH
    // ============================================================================

    #[test]
    fn test_make_date_time_utc() {
        let lut = DateLut::utc();
        assert_eq!(lut.make_date_time(1970, 1, 1, 0, 0, 0), 0);
        assert_eq!(lut.make_date_time(2023, 2, 28, 17, 12, 33), 1677604353);
        assert_eq!(lut.make_date_time(2023, 9, 11, 13, 14, 15), 1694438055);
    }

    #[test]
    fn test_make_date_time_time_overflow() {
        let lut = DateLut::utc();
        // 1984-01-01 99:99:99 is 1984-01-05 04:40:39.
        assert_eq!(
            lut.make_date_time(1984, 1, 1, 99, 99, 99),
            lut.make_date_time(1984, 1, 5, 4, 40, 39)
        );
        assert_eq!(lut.make_date_time(1984, 1, 1, 99, 99, 99), 442125639);
    }

    #[test]
    fn test_make_date_time_bounds() {
        let lut = DateLut::utc();
        // Invalid fields select the first day of the LUT.
        assert_eq!(lut.make_date_time(1899, 1, 1, 0, 0, 0), -2208988800);
        assert_eq!(lut.make_date_time(2023, 13, 1, 0, 0, 0), -2208988800);
        // Years past the end select the last day.
        assert_eq!(lut.make_date_time(2300, 1, 1, 23, 59, 59), 10413791999);
    }

    #[test]
    fn test_make_date_time_named_zones() {
        let berlin = DateLut::new("Europe/Berlin").unwrap();
        assert_eq!(berlin.time_zone(), "Europe/Berlin");
        assert_eq!(berlin.make_date_time(2023, 2, 28, 17, 12, 33), 1677600753);
        // Summer time: UTC+2.
        assert_eq!(berlin.make_date_time(2023, 7, 1, 12, 0, 0), 1688205600);

        let istanbul = DateLut::new("Asia/Istanbul").unwrap();
        assert_eq!(istanbul.make_date_time(2023, 9, 11, 13, 14, 15), 1694427255);

        let new_york = DateLut::new("America/New_York").unwrap();
        assert_eq!(new_york.make_date_time(2023, 9, 11, 13, 14, 15), 1694452455);
    }

    #[test]
    fn test_make_date_time_transitions() {
        let berlin = DateLut::new("Europe/Berlin").unwrap();
        // 02:30 does not exist on 2023-03-26; the pre-transition offset applies.
        assert_eq!(berlin.make_date_time(2023, 3, 26, 2, 30, 0), 1679794200);
        // 02:30 occurs twice on 2023-10-29; the earlier instant is chosen.
        assert_eq!(berlin.make_date_time(2023, 10, 29, 2, 30, 0), 1698539400);
    }

    #[test]
    fn test_day_num_is_zone_independent() {
        let utc = DateLut::utc();
        let tokyo = DateLut::new("Asia/Tokyo").unwrap();
        assert_eq!(
            utc.make_day_num(2023, 9, 11),
            tokyo.make_day_num(2023, 9, 11)
        );
    }

    #[test]
    fn test_unknown_zone() {
        assert!(DateLut::new("Mars/Olympus_Mons").is_err());
        assert!(DateLut::new("").is_err());
    }
}

#[cfg(test)]
mod registry_tests {
    use std::sync::Arc;

    use crate::calendar::{Calendar, CalendarProvider};
    use crate::registry::TimeZoneRegistry;
    use crate::TimeZoneError;

    #[test]
    fn test_default_calendar() {
        let registry = TimeZoneRegistry::utc();
        assert_eq!(registry.default_calendar().time_zone(), "UTC");
        assert_eq!(registry.calendar("").unwrap().time_zone(), "UTC");
        assert_eq!(registry.len(), 1);

        let registry = TimeZoneRegistry::new("Asia/Istanbul").unwrap();
        assert_eq!(registry.default_calendar().time_zone(), "Asia/Istanbul");
    }

    #[test]
    fn test_calendars_are_cached() {
        let registry = TimeZoneRegistry::utc();
        let first = registry.get("Europe/Berlin").unwrap();
        let second = registry.get("Europe/Berlin").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_zone() {
        let registry = TimeZoneRegistry::utc();
        let err = registry.calendar("Nowhere/Special").unwrap_err();
        assert_eq!(
            err,
            TimeZoneError::UnknownTimeZone("Nowhere/Special".to_string())
        );
        assert_eq!(registry.len(), 1);
        assert!(TimeZoneRegistry::new("Nowhere/Special").is_err());
    }

    #[test]
    fn test_concurrent_lookups() {
        let registry = Arc::new(TimeZoneRegistry::utc());
        let handles = (0..8)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let name = if i % 2 == 0 { "Asia/Tokyo" } else { "America/Chicago" };
                    registry.get(name).unwrap().time_zone().to_string()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 3);
    }
}
