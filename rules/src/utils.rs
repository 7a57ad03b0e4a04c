/// Wraps `text` in double quotes, escaping it the way a JSON string would.
pub fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::quote;

    #[test]
    fn test_quote() {
        assert_eq!(quote("private.v1"), "\"private.v1\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
