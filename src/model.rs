use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The raw ingredient text submitted as one search.
///
/// The text is sent exactly as typed; an empty string is a valid query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub ingredients: String,
}

impl SearchQuery {
    pub fn new(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
        }
    }
}

/// Similarity score reported by the search service.
///
/// The service decides the scale, so the value is kept as it arrived and
/// only ever displayed. Strings display without quotes, everything else in
/// its JSON form.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Similarity(pub Value);

impl Default for Similarity {
    fn default() -> Self {
        Similarity(Value::Null)
    }
}

impl From<f64> for Similarity {
    fn from(score: f64) -> Self {
        Similarity(Value::from(score))
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Number(n) if n.is_f64() => match n.as_f64() {
                // Whole floats print without a fractional part: 1.0 shows as 1.
                Some(x) if x == 0.0 => f.write_str("0"),
                Some(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e21 => {
                    write!(f, "{:.0}", x)
                }
                _ => write!(f, "{}", n),
            },
            other => write!(f, "{}", other),
        }
    }
}

/// One candidate recipe returned for a query
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecipeMatch {
    pub recipe_name: String,
    /// Human-readable ingredient description, not a structured list
    pub ingredients: String,
    #[serde(default)]
    pub similarity: Similarity,
}

/// Ordered matches for one query, as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SearchResult(pub Vec<RecipeMatch>);

impl SearchResult {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeMatch> {
        self.0.iter()
    }
}

impl IntoIterator for SearchResult {
    type Item = RecipeMatch;
    type IntoIter = std::vec::IntoIter<RecipeMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
