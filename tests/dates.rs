#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use sitelog::libs::dates::{day_difference, format_hours_carry, is_same_day, normalize_to_day};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_normalize_clears_time_of_day() {
        let normalized = normalize_to_day(at(2025, 3, 14, 23, 59));
        assert_eq!(normalized.time(), NaiveTime::MIN);
        assert_eq!(normalized.date(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_day_difference_ignores_time_of_day() {
        // Late evening vs early morning must still be exactly one day apart.
        let target = at(2025, 3, 15, 0, 1);
        let reference = at(2025, 3, 14, 23, 59);
        assert_eq!(day_difference(target, reference), 1);
        assert_eq!(day_difference(reference, target), -1);
    }

    #[test]
    fn test_day_difference_same_day_is_zero() {
        assert_eq!(day_difference(at(2025, 3, 14, 8, 0), at(2025, 3, 14, 17, 30)), 0);
    }

    #[test]
    fn test_day_difference_across_month_boundary() {
        assert_eq!(day_difference(at(2025, 4, 2, 9, 0), at(2025, 3, 30, 9, 0)), 3);
    }

    #[test]
    fn test_is_same_day_compares_fields() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert!(is_same_day(at(2025, 3, 14, 0, 0), day));
        assert!(is_same_day(at(2025, 3, 14, 23, 59), day));
        assert!(!is_same_day(at(2025, 3, 15, 0, 0), day));
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_hours_carry_at_sixty_minutes() {
        assert_close(format_hours_carry(1.60), 2.00);
    }

    #[test]
    fn test_hours_carry_above_sixty_minutes() {
        assert_close(format_hours_carry(2.65), 3.05);
    }

    #[test]
    fn test_hours_no_carry_below_sixty_minutes() {
        assert_close(format_hours_carry(0.59), 0.59);
        assert_close(format_hours_carry(7.30), 7.30);
    }

    #[test]
    fn test_hours_carry_whole_values_unchanged() {
        assert_eq!(format_hours_carry(8.0), 8.0);
    }

    #[test]
    fn test_hours_carry_clamps_non_positive() {
        assert_eq!(format_hours_carry(0.0), 0.0);
        assert_eq!(format_hours_carry(-1.25), 0.0);
    }
}
