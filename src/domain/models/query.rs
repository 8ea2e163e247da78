use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Results per page. Fixed by the UI and mirrored by the service default.
pub const PAGE_SIZE: u32 = 10;

/// Filters and pagination cursor for a speech search.
///
/// Date invariant: `to_date`, when set, is never earlier than `from_date`.
/// The setters enforce it; construct through them rather than field access
/// when the dates come from user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: None,
            from_date: None,
            to_date: None,
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    /// Empty input means "no text filter", matching the service contract
    /// where `q` is simply omitted.
    pub fn set_text(&mut self, text: &str) {
        self.text = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
    }

    /// Moving the lower bound past the current upper bound drops the upper
    /// bound instead of leaving an empty range on screen.
    pub fn set_from_date(&mut self, from: Option<NaiveDate>) {
        if let (Some(f), Some(t)) = (from, self.to_date) {
            if f > t {
                self.to_date = None;
            }
        }
        self.from_date = from;
    }

    /// An upper bound earlier than the lower bound is rejected outright.
    pub fn set_to_date(&mut self, to: Option<NaiveDate>) {
        if let (Some(f), Some(t)) = (self.from_date, to) {
            if t < f {
                return;
            }
        }
        self.to_date = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_targets_first_page() {
        let query = SearchQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, PAGE_SIZE);
        assert!(query.text.is_none());
    }

    #[test]
    fn test_empty_text_clears_filter() {
        let mut query = SearchQuery::default();
        query.set_text("οικονομία");
        assert_eq!(query.text.as_deref(), Some("οικονομία"));
        query.set_text("");
        assert!(query.text.is_none());
    }

    #[test]
    fn test_from_date_past_to_date_clears_to_date() {
        let mut query = SearchQuery::default();
        query.set_from_date(Some(date(2019, 1, 1)));
        query.set_to_date(Some(date(2019, 6, 30)));

        query.set_from_date(Some(date(2020, 1, 1)));
        assert_eq!(query.from_date, Some(date(2020, 1, 1)));
        assert!(query.to_date.is_none());
    }

    #[test]
    fn test_to_date_before_from_date_is_rejected() {
        let mut query = SearchQuery::default();
        query.set_from_date(Some(date(2019, 6, 1)));
        query.set_to_date(Some(date(2019, 1, 1)));
        assert!(query.to_date.is_none());

        query.set_to_date(Some(date(2019, 6, 1)));
        assert_eq!(query.to_date, Some(date(2019, 6, 1)));
    }

    #[test]
    fn test_clearing_from_date_keeps_to_date() {
        let mut query = SearchQuery::default();
        query.set_from_date(Some(date(2019, 1, 1)));
        query.set_to_date(Some(date(2019, 12, 31)));
        query.set_from_date(None);
        assert_eq!(query.to_date, Some(date(2019, 12, 31)));
    }
}
