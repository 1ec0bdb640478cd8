//! German display text: relative times and EUR amounts.

use chrono::{DateTime, Utc};

const HOUR: u64 = 60;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Relative distance between `at` and `now`, worded like a German
/// "time ago" label: `vor 3 Tagen`, `vor 1 Tag`, `in 12 Tagen`,
/// `in etwa 1 Monat`.
pub fn relative_time_de(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = at.signed_duration_since(now);
    let seconds = delta.num_seconds().unsigned_abs();
    let minutes = (seconds + 30) / 60;
    let distance = distance_de(minutes);

    if delta.num_seconds() > 0 {
        format!("in {distance}")
    } else {
        format!("vor {distance}")
    }
}

// Dative forms, since the distance always follows "vor"/"in".
fn distance_de(minutes: u64) -> String {
    match minutes {
        0 => "weniger als einer Minute".to_string(),
        1 => "1 Minute".to_string(),
        m if m < 45 => format!("{m} Minuten"),
        m if m < 90 => "etwa 1 Stunde".to_string(),
        m if m < DAY => format!("etwa {} Stunden", rounded(m, HOUR)),
        m if m < 42 * HOUR => "1 Tag".to_string(),
        m if m < MONTH => format!("{} Tagen", rounded(m, DAY)),
        m if m < 45 * DAY => "etwa 1 Monat".to_string(),
        m if m < 60 * DAY => "etwa 2 Monaten".to_string(),
        m if m < YEAR => format!("{} Monaten", rounded(m, MONTH)),
        m => match rounded(m, YEAR) {
            1 => "etwa 1 Jahr".to_string(),
            n => format!("etwa {n} Jahren"),
        },
    }
}

fn rounded(value: u64, unit: u64) -> u64 {
    (value + unit / 2) / unit
}

/// Whole-euro amount in German notation, e.g. `1.245.000,00 €`.
pub fn format_eur(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{grouped},00 €")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn same_instant_reads_as_less_than_a_minute() {
        assert_eq!(relative_time_de(now(), now()), "vor weniger als einer Minute");
    }

    #[test]
    fn past_days_use_dative_plural() {
        assert_eq!(relative_time_de(now() - Duration::days(1), now()), "vor 1 Tag");
        assert_eq!(relative_time_de(now() - Duration::days(3), now()), "vor 3 Tagen");
        assert_eq!(relative_time_de(now() - Duration::days(19), now()), "vor 19 Tagen");
    }

    #[test]
    fn future_dates_read_with_in() {
        assert_eq!(relative_time_de(now() + Duration::days(12), now()), "in 12 Tagen");
        assert_eq!(relative_time_de(now() + Duration::days(40), now()), "in etwa 1 Monat");
        assert_eq!(relative_time_de(now() + Duration::days(50), now()), "in etwa 2 Monaten");
        assert_eq!(relative_time_de(now() + Duration::days(60), now()), "in 2 Monaten");
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(relative_time_de(now() - Duration::minutes(1), now()), "vor 1 Minute");
        assert_eq!(relative_time_de(now() - Duration::minutes(10), now()), "vor 10 Minuten");
        assert_eq!(relative_time_de(now() - Duration::minutes(60), now()), "vor etwa 1 Stunde");
        assert_eq!(relative_time_de(now() - Duration::hours(5), now()), "vor etwa 5 Stunden");
    }

    #[test]
    fn years() {
        assert_eq!(relative_time_de(now() - Duration::days(400), now()), "vor etwa 1 Jahr");
        assert_eq!(relative_time_de(now() - Duration::days(800), now()), "vor etwa 2 Jahren");
    }

    #[test]
    fn eur_amounts_group_thousands() {
        assert_eq!(format_eur(0), "0,00 €");
        assert_eq!(format_eur(950), "950,00 €");
        assert_eq!(format_eur(15_000), "15.000,00 €");
        assert_eq!(format_eur(200_000), "200.000,00 €");
        assert_eq!(format_eur(1_245_000), "1.245.000,00 €");
    }
}
