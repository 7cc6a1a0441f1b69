//! Rule records as stored in the dataset.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{CoreError, Result},
    slug::normalize,
};

/// One security rule: an API usage pattern flagged by an analysis tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Tool that produced the rule.
    pub tool_name: String,

    /// Library the API belongs to.
    pub lib_name: String,

    /// API the rule governs.
    pub api_name: String,

    /// Rule details.
    pub rule: RuleBody,
}

/// The nested rule object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBody {
    #[serde(rename = "Description")]
    pub description: String,

    /// Rule labels; only the first is used.
    #[serde(rename = "Label")]
    pub label: Vec<String>,

    /// Parameter indices; only the first is used. Values may be numbers or strings.
    #[serde(
        rename = "Parameter-index",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parameter_index: Option<Vec<Value>>,

    #[serde(rename = "cweType-and-QLCode")]
    pub cwe_and_code: Vec<CweEntry>,
}

/// Fields a rendered page needs, each taken from the first list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFields<'a> {
    pub label: &'a str,
    pub cwe_type: &'a str,
    pub code: &'a str,
}

/// A CWE classification paired with the query code that detects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CweEntry {
    #[serde(rename = "cweType")]
    pub cwe_type: Vec<String>,

    #[serde(rename = "QLCode")]
    pub ql_code: String,
}

impl Rule {
    /// First label of the rule.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.rule.label.first().map(String::as_str)
    }

    /// First parameter index rendered as text, or an empty string.
    #[must_use]
    pub fn parameter_index(&self) -> String {
        match self.rule.parameter_index.as_ref().and_then(|v| v.first()) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Resolve the page fields of the rule at `index` in its dataset.
    pub fn fields(&self, index: usize) -> Result<RuleFields<'_>> {
        let invalid = |message: &str| CoreError::invalid_rule(index, &self.api_name, message);

        let label = self.label().ok_or_else(|| invalid("Label is empty"))?;
        let entry = self
            .rule
            .cwe_and_code
            .first()
            .ok_or_else(|| invalid("cweType-and-QLCode is empty"))?;
        let cwe_type = entry
            .cwe_type
            .first()
            .map(String::as_str)
            .ok_or_else(|| invalid("cweType is empty"))?;

        Ok(RuleFields {
            label,
            cwe_type,
            code: &entry.ql_code,
        })
    }

    /// Slug of the library name.
    #[must_use]
    pub fn lib_slug(&self) -> String {
        normalize(&self.lib_name)
    }

    /// Slug of the API name.
    #[must_use]
    pub fn api_slug(&self) -> String {
        normalize(&self.api_name)
    }

    /// Page location relative to the documentation root, unencoded.
    #[must_use]
    pub fn page_path(&self) -> String {
        format!("projects/{}/api_{}.md", self.lib_slug(), self.api_slug())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;

    pub(crate) fn sample_rule(lib: &str, api: &str, label: &str) -> Rule {
        serde_json::from_value(json!({
            "tool_name": "CodeQL",
            "lib_name": lib,
            "api_name": api,
            "rule": {
                "Description": "Check <ret> value",
                "Label": [label],
                "cweType-and-QLCode": [
                    { "cweType": ["CWE-252"], "QLCode": "pass" }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_rule() {
        let rule: Rule = serde_json::from_value(json!({
            "tool_name": "CodeQL",
            "lib_name": "OpenSSL",
            "api_name": "SSL_new",
            "rule": {
                "Description": "desc",
                "Label": ["initialization", "other"],
                "Parameter-index": [2, 3],
                "cweType-and-QLCode": [
                    { "cweType": ["CWE-665", "CWE-1"], "QLCode": "from x import y" },
                    { "cweType": ["CWE-2"], "QLCode": "ignored" }
                ]
            }
        }))
        .unwrap();

        let fields = rule.fields(0).unwrap();
        assert_eq!(fields.label, "initialization");
        assert_eq!(fields.cwe_type, "CWE-665");
        assert_eq!(fields.code, "from x import y");
        assert_eq!(rule.parameter_index(), "2");
        assert_eq!(rule.page_path(), "projects/openssl/api_ssl_new.md");
    }

    #[test]
    fn test_parameter_index_variants() {
        let mut rule = sample_rule("lib", "api", "initialization");
        assert_eq!(rule.parameter_index(), "");

        rule.rule.parameter_index = Some(vec![json!("arg0")]);
        assert_eq!(rule.parameter_index(), "arg0");

        rule.rule.parameter_index = Some(vec![]);
        assert_eq!(rule.parameter_index(), "");

        rule.rule.parameter_index = Some(vec![json!(null), json!(1)]);
        assert_eq!(rule.parameter_index(), "");
    }

    #[test]
    fn test_missing_fields_are_errors() {
        let mut rule = sample_rule("lib", "api", "initialization");
        rule.rule.cwe_and_code[0].cwe_type.clear();
        let err = rule.fields(4).unwrap_err();
        assert!(err.to_string().contains("#4"));
        assert!(err.to_string().contains("cweType is empty"));

        rule.rule.cwe_and_code.clear();
        assert!(rule.fields(0).is_err());

        rule.rule.label.clear();
        assert!(rule.label().is_none());
        assert!(matches!(
            rule.fields(7),
            Err(CoreError::InvalidRule { index: 7, .. })
        ));
    }
}
