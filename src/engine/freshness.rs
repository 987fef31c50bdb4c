//! Best-effort interpretation of human-relative freshness strings
//!
//! Entries store `lastUpdated` as a display string ("2 days ago", "1 week
//! ago"). The Newest sort needs an ordering over those strings, so this
//! module parses the common "<n> <unit> ago" shape into an age. Strings that
//! do not fit the shape get no age and sort after everything that does; the
//! field itself is never rewritten.

use chrono::Duration;

/// Parse a relative freshness string into an age. `None` means the string is
/// not interpretable as an age.
pub(crate) fn age_of(last_updated: &str) -> Option<Duration> {
    let text = last_updated.trim().to_lowercase();

    match text.as_str() {
        "just now" => return Some(Duration::zero()),
        "yesterday" => return Some(Duration::days(1)),
        _ => {}
    }

    let mut words = text.split_whitespace();
    let amount = match words.next()? {
        "a" | "an" => 1,
        token => token.parse::<i64>().ok()?,
    };
    let unit = words.next()?;
    if words.next() != Some("ago") || words.next().is_some() {
        return None;
    }

    match unit.trim_end_matches('s') {
        "minute" => Some(Duration::minutes(amount)),
        "hour" => Some(Duration::hours(amount)),
        "day" => Some(Duration::days(amount)),
        "week" => Some(Duration::weeks(amount)),
        "month" => Some(Duration::days(amount * 30)),
        "year" => Some(Duration::days(amount * 365)),
        _ => None,
    }
}

/// Age in hours for sort keys; unparseable strings rank oldest.
pub(crate) fn age_rank(last_updated: &str) -> i64 {
    age_of(last_updated).map_or(i64::MAX, |age| age.num_hours())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_common_shapes() {
        assert_eq!(age_of("12 hours ago"), Some(Duration::hours(12)));
        assert_eq!(age_of("2 days ago"), Some(Duration::days(2)));
        assert_eq!(age_of("1 day ago"), Some(Duration::days(1)));
        assert_eq!(age_of("3 weeks ago"), Some(Duration::weeks(3)));
        assert_eq!(age_of("a week ago"), Some(Duration::weeks(1)));
        assert_eq!(age_of("yesterday"), Some(Duration::days(1)));
        assert_eq!(age_of("just now"), Some(Duration::zero()));
    }

    #[test]
    fn test_rejects_non_ages() {
        assert_eq!(age_of("Oct 12, 2024"), None);
        assert_eq!(age_of("recently"), None);
        assert_eq!(age_of("2 days"), None);
        assert_eq!(age_of("2 days ago exactly"), None);
    }

    #[test]
    fn test_unparseable_ranks_oldest() {
        assert!(age_rank("1 day ago") < age_rank("2 weeks ago"));
        assert_eq!(age_rank("recently"), i64::MAX);
    }
}
