//! Rule base: `[input_term, output_term]` pairs.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// "If input is `input` then output is `output`."
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Rule {
    /// Term of the input variable
    pub input: String,
    /// Term of the output variable
    pub output: String,
}

impl Rule {
    /// Creates a rule.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl From<(String, String)> for Rule {
    fn from((input, output): (String, String)) -> Self {
        Self { input, output }
    }
}

impl From<Rule> for (String, String) {
    fn from(rule: Rule) -> Self {
        (rule.input, rule.output)
    }
}

/// Parses a rule document such as `[["cold", "high"], ["hot", "low"]]`.
///
/// # Errors
///
/// [`FuzzyError::Parse`](crate::FuzzyError::Parse) if the document is not
/// an array of string pairs.
pub fn parse_rules(json: &str) -> Result<Vec<Rule>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuzzyError;

    #[test]
    fn test_parse_rules() {
        let rules = parse_rules(r#"[["cold", "high"], ["hot", "low"]]"#).unwrap();
        assert_eq!(rules, vec![Rule::new("cold", "high"), Rule::new("hot", "low")]);
    }

    #[test]
    fn test_rules_serialize_as_pairs() {
        let json = serde_json::to_string(&vec![Rule::new("a", "b")]).unwrap();
        assert_eq!(json, r#"[["a","b"]]"#);
    }

    #[test]
    fn test_malformed_rules() {
        for bad in [r#"[["cold"]]"#, r#"{"cold": "high"}"#, r#"[[1, 2]]"#] {
            assert!(matches!(parse_rules(bad), Err(FuzzyError::Parse(_))), "{}", bad);
        }
        assert!(parse_rules("[]").unwrap().is_empty());
    }
}
