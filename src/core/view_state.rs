//! View state: the (search text, category filter, sort mode) tuple that
//! governs what the grid shows.
//!
//! Serialized form (store key `app.state`):
//!
//! ```json
//! { "query": "shop", "category": "Web", "sortMode": "asc" }
//! ```
//!
//! Loading is per-field lenient: whatever fields are usable are overlaid on
//! the defaults, everything else is dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "pop")]
    Popularity,
    #[serde(rename = "asc")]
    PriceAsc,
    #[serde(rename = "desc")]
    PriceDesc,
    #[serde(rename = "az")]
    NameAsc,
}

impl SortMode {
    /// All variants in the order the sort control lists them.
    pub const ALL: [SortMode; 4] = [
        Self::Popularity,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
    ];

    /// Control value token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Popularity => "pop",
            Self::PriceAsc => "asc",
            Self::PriceDesc => "desc",
            Self::NameAsc => "az",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Popularity => "Most popular",
            Self::PriceAsc => "Price: low to high",
            Self::PriceDesc => "Price: high to low",
            Self::NameAsc => "Name: A to Z",
        }
    }

    /// Strict parse; `None` for unknown tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.token() == token)
    }

    /// Parse a raw control value, falling back to [`SortMode::Popularity`].
    pub fn parse_or_default(token: &str) -> Self {
        Self::from_token(token).unwrap_or_default()
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ============================================================================
// ViewState
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Trimmed free text; empty matches everything.
    pub query: String,
    /// Category name; empty means "any".
    pub category: String,
    pub sort_mode: SortMode,
}

impl ViewState {
    pub fn new(query: impl Into<String>, category: impl Into<String>, sort_mode: SortMode) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
            sort_mode,
        }
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_string();
    }

    pub fn set_category(&mut self, raw: &str) {
        self.category = raw.to_string();
    }

    pub fn set_sort(&mut self, raw: &str) {
        self.sort_mode = SortMode::parse_or_default(raw);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the fields present in `partial`, keep the rest.
    pub fn overlay(&mut self, partial: PartialViewState) {
        if let Some(query) = partial.query {
            self.query = query;
        }
        if let Some(category) = partial.category {
            self.category = category;
        }
        if let Some(sort_mode) = partial.sort_mode {
            self.sort_mode = sort_mode;
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// PartialViewState
// ============================================================================

/// Whatever subset of a [`ViewState`] could be recovered from storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialViewState {
    pub query: Option<String>,
    pub category: Option<String>,
    pub sort_mode: Option<SortMode>,
}

impl PartialViewState {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.category.is_none() && self.sort_mode.is_none()
    }

    /// Lenient decode. Invalid JSON, a non-object document, or a field of the
    /// wrong type never fails; the unusable part is simply absent.
    pub fn from_json(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Stored view state is not valid JSON");
                return Self::default();
            }
        };
        let Value::Object(map) = value else {
            return Self::default();
        };

        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            query: text("query"),
            category: text("category"),
            sort_mode: map
                .get("sortMode")
                .and_then(Value::as_str)
                .and_then(SortMode::from_token),
        }
    }
}

impl From<ViewState> for PartialViewState {
    fn from(state: ViewState) -> Self {
        Self {
            query: Some(state.query),
            category: Some(state.category),
            sort_mode: Some(state.sort_mode),
        }
    }
}
