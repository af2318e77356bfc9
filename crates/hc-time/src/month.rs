//! `Month`: month-of-year enum.

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

const ALL: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Parse an English month name or abbreviation.
    ///
    /// Same rules as [`Weekday::parse_name`](crate::Weekday::parse_name):
    /// `"Oct"`, `"Sept."`, `"october"` all resolve.
    pub fn parse_name(token: &str) -> Option<Self> {
        ALL.into_iter().find(|m| matches_english_name(token, m.long_name()))
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

/// `true` if `token` names `full`: a case-insensitive prefix of at least
/// three letters, optionally followed by a single period.
pub(crate) fn matches_english_name(token: &str, full: &str) -> bool {
    let token = token.trim();
    let token = token.strip_suffix('.').unwrap_or(token);
    token.len() >= 3
        && token.len() <= full.len()
        && token.chars().all(|c| c.is_ascii_alphabetic())
        && full[..token.len()].eq_ignore_ascii_case(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_declaration_order() {
        for (i, m) in ALL.iter().enumerate() {
            assert_eq!(m.number() as usize, i + 1);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!(Month::parse_name("Oct"), Some(Month::October));
        assert_eq!(Month::parse_name("Sept."), Some(Month::September));
        assert_eq!(Month::parse_name("february"), Some(Month::February));
        assert_eq!(Month::parse_name("Ju"), None);
        assert_eq!(Month::parse_name("12"), None);
        assert_eq!(Month::parse_name("Octob3r"), None);
    }

    #[test]
    fn display_uses_long_name() {
        assert_eq!(Month::May.to_string(), "May");
        assert_eq!(Month::December.to_string(), "December");
    }
}
