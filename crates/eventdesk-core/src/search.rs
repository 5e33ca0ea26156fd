// ── Event search filter ──

use chrono::NaiveDate;
use eventdesk_api::types::EventSearchRequest;
use serde::{Deserialize, Serialize};

const SORT_BY: &str = "startDateTime";
const SORT_ORDER: &str = "desc";

/// The filter fields of the event list view.
///
/// Text fields are kept exactly as typed; blanks are dropped only when the
/// request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub keyword: Option<String>,
    pub status: Option<String>,
    pub organizer: Option<String>,
    pub location: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

fn non_blank(field: Option<&String>) -> Option<String> {
    field
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

impl SearchFilter {
    /// Whether any field would make it into a search request.
    pub fn is_active(&self) -> bool {
        [&self.keyword, &self.status, &self.organizer, &self.location]
            .into_iter()
            .any(|f| non_blank(f.as_ref()).is_some())
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    /// Build the search payload for `page`. Blank fields are omitted and
    /// the date range covers whole days.
    pub fn to_request(&self, page: u32, size: u32) -> EventSearchRequest {
        EventSearchRequest {
            keyword: non_blank(self.keyword.as_ref()),
            status: non_blank(self.status.as_ref()),
            organizer: non_blank(self.organizer.as_ref()),
            location: non_blank(self.location.as_ref()),
            start_date_from: self.date_from.and_then(|d| d.and_hms_opt(0, 0, 0)),
            start_date_to: self.date_to.and_then(|d| d.and_hms_opt(23, 59, 59)),
            page,
            size,
            sort_by: SORT_BY.into(),
            sort_order: SORT_ORDER.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn blank_fields_never_reach_the_payload() {
        let filter = SearchFilter {
            keyword: Some("  ".into()),
            status: Some(String::new()),
            organizer: Some(" Org ".into()),
            location: None,
            date_from: None,
            date_to: None,
        };

        let body = serde_json::to_value(filter.to_request(0, 10)).unwrap();
        assert_eq!(
            body,
            json!({
                "organizer": "Org",
                "page": 0,
                "size": 10,
                "sortBy": "startDateTime",
                "sortOrder": "desc"
            })
        );
    }

    #[test]
    fn date_range_spans_whole_days() {
        let filter = SearchFilter {
            date_from: Some(NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()),
            date_to: Some(NaiveDate::from_ymd_opt(2030, 6, 30).unwrap()),
            ..SearchFilter::default()
        };

        let body = serde_json::to_value(filter.to_request(2, 5)).unwrap();
        assert_eq!(body["startDateFrom"], "2030-06-01T00:00:00");
        assert_eq!(body["startDateTo"], "2030-06-30T23:59:59");
    }

    #[test]
    fn activity_ignores_whitespace() {
        assert!(!SearchFilter::default().is_active());
        let blank = SearchFilter {
            keyword: Some(" ".into()),
            ..SearchFilter::default()
        };
        assert!(!blank.is_active());
        let status = SearchFilter {
            status: Some("ACTIVE".into()),
            ..SearchFilter::default()
        };
        assert!(status.is_active());
    }
}
