use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::ListQuery;

/// Query-string parameters of a listing request.
///
/// Any parameter may be omitted, in which case the server default applies.
/// Numbers are kept as text so that a malformed value is reported rather
/// than silently replaced by the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromForm, Serialize, Deserialize)]
pub struct ListOpenElectionsRequest {
    pub page: Option<String>,
    pub items_per_page: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

impl ListOpenElectionsRequest {
    /// Fill in defaults and validate the result.
    pub fn resolve(&self, default_items_per_page: u32) -> Result<ListQuery> {
        let page = match &self.page {
            Some(page) => parse_int32("page", page)?,
            None => 1,
        };
        let items_per_page = match &self.items_per_page {
            Some(items) => parse_int32("items_per_page", items)?,
            None => default_items_per_page.into(),
        };
        let sort_by = match &self.sort_by {
            Some(sort_by) => sort_by.parse()?,
            None => Default::default(),
        };
        let sort_direction = match &self.sort_direction {
            Some(direction) => direction.parse()?,
            None => Default::default(),
        };
        ListQuery::new(page, items_per_page, sort_by, sort_direction)
    }
}

/// Pagination values travel as 32-bit integers.
fn parse_int32(field: &str, raw: &str) -> Result<i64> {
    raw.parse::<i32>()
        .map(i64::from)
        .map_err(|_| {
            Error::invalid_argument(format!("{field} must be a 32-bit integer, got '{raw}'"))
        })
}

/// Helpers for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl ListOpenElectionsRequest {
        /// A fully specified request.
        pub fn example(
            page: i32,
            items_per_page: i32,
            sort_by: &str,
            sort_direction: &str,
        ) -> Self {
            Self {
                page: Some(page.to_string()),
                items_per_page: Some(items_per_page.to_string()),
                sort_by: Some(sort_by.to_string()),
                sort_direction: Some(sort_direction.to_string()),
            }
        }

        /// Render as a query string, omitting unset parameters.
        pub fn to_query_string(&self) -> String {
            [
                ("page", &self.page),
                ("items_per_page", &self.items_per_page),
                ("sort_by", &self.sort_by),
                ("sort_direction", &self.sort_direction),
            ]
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|value| format!("{name}={value}")))
            .collect::<Vec<_>>()
            .join("&")
        }
    }
}
