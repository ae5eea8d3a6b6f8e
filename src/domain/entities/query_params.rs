/// The value(s) one query-string key carried.
///
/// Filters are read from raw `(key, value)` pairs so that a repeated key is
/// kept as `Repeated` instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryValue {
    #[default]
    Absent,
    Single(String),
    Repeated(Vec<String>),
}

impl QueryValue {
    /// Collects every value given for `key`, in query order.
    pub fn collect(pairs: &[(String, String)], key: &str) -> Self {
        let mut values: Vec<String> = pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect();

        match values.len() {
            0 => QueryValue::Absent,
            1 => QueryValue::Single(values.remove(0)),
            _ => QueryValue::Repeated(values),
        }
    }

    /// The value when the key appeared exactly once.
    pub fn single(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn absent_single_and_repeated() {
        let query = pairs(&[("category", "frontend"), ("featured", "true"), ("category", "backend")]);

        assert_eq!(QueryValue::collect(&query, "icon"), QueryValue::Absent);
        assert_eq!(QueryValue::collect(&query, "featured").single(), Some("true"));
        assert_eq!(
            QueryValue::collect(&query, "category"),
            QueryValue::Repeated(vec!["frontend".into(), "backend".into()])
        );
    }

    #[test]
    fn empty_value_is_still_single() {
        let query = pairs(&[("category", "")]);

        assert_eq!(QueryValue::collect(&query, "category").single(), Some(""));
    }
}
