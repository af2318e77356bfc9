//! `YearWindow`: the contiguous range of years processed in one run.

use chrono::Datelike;
use hc_core::ensure;
use hc_core::errors::Result;

/// Years back and forward from a reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    years_back: u32,
    years_forward: u32,
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            years_back: 5,
            years_forward: 1,
        }
    }
}

impl YearWindow {
    /// Largest span accepted on either side of the reference year.
    pub const MAX_SPAN: u32 = 200;

    /// Create a window of `years_back` years before and `years_forward`
    /// years after the reference year.
    pub fn new(years_back: u32, years_forward: u32) -> Result<Self> {
        ensure!(
            years_back <= Self::MAX_SPAN,
            "years_back must be at most {}, got {years_back}",
            Self::MAX_SPAN
        );
        ensure!(
            years_forward <= Self::MAX_SPAN,
            "years_forward must be at most {}, got {years_forward}",
            Self::MAX_SPAN
        );
        Ok(Self {
            years_back,
            years_forward,
        })
    }

    /// The years of the window around `reference`, ascending and inclusive.
    pub fn years_around(&self, reference: i32) -> Vec<i32> {
        let first = reference - self.years_back as i32;
        let last = reference + self.years_forward as i32;
        (first..=last).collect()
    }

    /// The years of the window around the current local year.
    pub fn current_years(&self) -> Vec<i32> {
        self.years_around(chrono::Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window() {
        let years = YearWindow::default().years_around(2024);
        assert_eq!(years, [2019, 2020, 2021, 2022, 2023, 2024, 2025]);
    }

    #[test]
    fn empty_sides() {
        assert_eq!(YearWindow::new(0, 0).unwrap().years_around(2024), [2024]);
    }

    #[test]
    fn rejects_huge_spans() {
        assert!(YearWindow::new(201, 0).is_err());
        assert!(YearWindow::new(0, 201).is_err());
    }

    #[test]
    fn current_contains_this_year() {
        let this_year = chrono::Local::now().year();
        assert!(YearWindow::default().current_years().contains(&this_year));
    }
}
