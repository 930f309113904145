use std::collections::HashMap;
use serde_json::Value;

/// Separator inserted between consecutive items by [`DataProcessor::format_join`]
pub const SEPARATOR: &str = ", ";

/// Named holder for the string-formatting operations
#[derive(Debug, Clone, PartialEq)]
pub struct DataProcessor {
    name: String,
    items: Vec<String>,
    metadata: HashMap<String, Value>,
}

impl DataProcessor {
    #[must_use] 
    pub fn new(name: impl Into<String>) -> Self {
        DataProcessor {
            name: name.into(),
            items: vec![],
            metadata: HashMap::new(),
        }
    }

    #[must_use] 
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Previously seen items (never populated by the formatting operations)
    #[must_use] 
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use] 
    pub fn metadata(&self) -> &HashMap<String, Value> {
        &self.metadata
    }

    /// Upper-case every item and join them with `", "`, keeping input order.
    ///
    /// Returns `None` for an empty slice, which is distinct from `Some("")`
    /// (a slice holding a single empty string).
    #[must_use] 
    pub fn format_join<S: AsRef<str>>(&self, items: &[S]) -> Option<String> {
        if items.is_empty() {
            return None;
        }

        let mut result = String::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                result.push_str(SEPARATOR);
            }
            result.push_str(&item.as_ref().to_uppercase());
        }
        Some(result)
    }

    /// True when `value` is non-empty and not made up entirely of whitespace
    #[must_use] 
    pub fn validate(&self, value: &str) -> bool {
        !value.is_empty() && !value.chars().all(is_space)
    }
}

/// Unicode whitespace plus the information separators U+001C..=U+001F
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
