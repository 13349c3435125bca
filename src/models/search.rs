//! Selection and paging options for collection requests.

use std::collections::HashMap;
use std::fmt;

/// Largest page Ontraport returns for a collection request.
pub const MAX_RANGE: u32 = 50;

/// Sort order for collection requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Options selecting which records a collection request applies to.
///
/// Built fluently and turned into query parameters with
/// [`to_query`](Self::to_query).
///
/// # Example
///
/// ```rust
/// use ontraport_api::models::{ApiSearchOptions, SortDirection};
///
/// let options = ApiSearchOptions::new()
///     .ids([1, 2, 3])
///     .sort("date", SortDirection::Descending)
///     .range(25);
///
/// let query = options.to_query();
/// assert_eq!(query.get("ids"), Some(&"1,2,3".to_string()));
/// assert_eq!(query.get("sortDir"), Some(&"desc".to_string()));
/// assert_eq!(query.get("range"), Some(&"25".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiSearchOptions {
    ids: Vec<i64>,
    start: Option<u32>,
    range: Option<u32>,
    sort: Option<(String, SortDirection)>,
    condition: Option<String>,
    search: Option<String>,
    search_notes: bool,
    group_ids: Vec<i64>,
    perform_all: bool,
    externs: Vec<String>,
    list_fields: Vec<String>,
}

impl ApiSearchOptions {
    /// Creates options selecting every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options selecting a single record.
    #[must_use]
    pub fn with_id(id: i64) -> Self {
        Self::new().ids([id])
    }

    /// Restricts the request to the given record IDs.
    #[must_use]
    pub fn ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ids.extend(ids);
        self
    }

    /// Sets the offset of the first record returned.
    #[must_use]
    pub const fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the number of records returned.
    ///
    /// Values above [`MAX_RANGE`] are clamped with a warning.
    #[must_use]
    pub fn range(mut self, range: u32) -> Self {
        if range > MAX_RANGE {
            tracing::warn!(
                "Requested range {} exceeds the maximum page size, using {}",
                range,
                MAX_RANGE
            );
        }
        self.range = Some(range.min(MAX_RANGE));
        self
    }

    /// Sorts by `field` in the given direction.
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some((field.into(), direction));
        self
    }

    /// Filters records with a condition expression or JSON condition array.
    #[must_use]
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Filters records with a text search.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Includes notes in the text search.
    #[must_use]
    pub const fn search_notes(mut self, search_notes: bool) -> Self {
        self.search_notes = search_notes;
        self
    }

    /// Restricts the request to records in the given groups.
    #[must_use]
    pub fn group_ids(mut self, group_ids: impl IntoIterator<Item = i64>) -> Self {
        self.group_ids.extend(group_ids);
        self
    }

    /// Applies the request to every record matching the other criteria.
    #[must_use]
    pub const fn perform_all(mut self, perform_all: bool) -> Self {
        self.perform_all = perform_all;
        self
    }

    /// Requests additional fields from related objects.
    #[must_use]
    pub fn externs(mut self, externs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.externs.extend(externs.into_iter().map(Into::into));
        self
    }

    /// Limits which fields are returned.
    #[must_use]
    pub fn list_fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.list_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if these options select records explicitly.
    ///
    /// Bulk deletes refuse to run without an explicit selection.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.ids.is_empty()
            || !self.group_ids.is_empty()
            || self.condition.is_some()
            || self.search.is_some()
            || self.perform_all
    }

    /// Converts the options to query parameters.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();

        if !self.ids.is_empty() {
            query.insert("ids".to_string(), join(&self.ids));
        }
        if let Some(start) = self.start {
            query.insert("start".to_string(), start.to_string());
        }
        if let Some(range) = self.range {
            query.insert("range".to_string(), range.to_string());
        }
        if let Some((field, direction)) = &self.sort {
            query.insert("sort".to_string(), field.clone());
            query.insert("sortDir".to_string(), direction.to_string());
        }
        if let Some(condition) = &self.condition {
            query.insert("condition".to_string(), condition.clone());
        }
        if let Some(search) = &self.search {
            query.insert("search".to_string(), search.clone());
            if self.search_notes {
                query.insert("searchNotes".to_string(), "1".to_string());
            }
        }
        if !self.group_ids.is_empty() {
            query.insert("group_ids".to_string(), join(&self.group_ids));
        }
        if self.perform_all {
            query.insert("performAll".to_string(), "1".to_string());
        }
        if !self.externs.is_empty() {
            query.insert("externs".to_string(), self.externs.join(","));
        }
        if !self.list_fields.is_empty() {
            query.insert("listFields".to_string(), self.list_fields.join(","));
        }

        query
    }
}

fn join(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_produce_empty_query() {
        assert!(ApiSearchOptions::new().to_query().is_empty());
        assert!(!ApiSearchOptions::new().has_selection());
    }

    #[test]
    fn test_with_id_selects_single_record() {
        let options = ApiSearchOptions::with_id(7);
        assert_eq!(options.to_query().get("ids"), Some(&"7".to_string()));
        assert!(options.has_selection());
    }

    #[test]
    fn test_range_is_clamped() {
        let query = ApiSearchOptions::new().range(500).to_query();
        assert_eq!(query.get("range"), Some(&"50".to_string()));
    }

    #[test]
    fn test_search_notes_requires_search() {
        let query = ApiSearchOptions::new().search_notes(true).to_query();
        assert!(!query.contains_key("searchNotes"));

        let query = ApiSearchOptions::new()
            .search("jane")
            .search_notes(true)
            .to_query();
        assert_eq!(query.get("search"), Some(&"jane".to_string()));
        assert_eq!(query.get("searchNotes"), Some(&"1".to_string()));
    }

    #[test]
    fn test_all_parameters_are_mapped() {
        let query = ApiSearchOptions::new()
            .start(50)
            .condition("firstname = 'Jane'")
            .group_ids([4, 5])
            .perform_all(true)
            .externs(["oprid"])
            .list_fields(["id", "email"])
            .sort("id", SortDirection::Ascending)
            .to_query();

        assert_eq!(query.get("start"), Some(&"50".to_string()));
        assert_eq!(query.get("condition"), Some(&"firstname = 'Jane'".to_string()));
        assert_eq!(query.get("group_ids"), Some(&"4,5".to_string()));
        assert_eq!(query.get("performAll"), Some(&"1".to_string()));
        assert_eq!(query.get("externs"), Some(&"oprid".to_string()));
        assert_eq!(query.get("listFields"), Some(&"id,email".to_string()));
        assert_eq!(query.get("sort"), Some(&"id".to_string()));
        assert_eq!(query.get("sortDir"), Some(&"asc".to_string()));
    }
}
