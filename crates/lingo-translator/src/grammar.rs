use async_trait::async_trait;
use serde::Deserialize;

use crate::{ServiceError, ensure_success};

/// Feedback when the checker reports nothing
pub const LOOKS_GOOD: &str = "Looks good!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarIssue {
    pub message: String,
    /// Character offset into the checked text
    pub offset: usize,
    pub length: usize,
    pub replacements: Vec<String>,
}

/// Grammar checking provider interface
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    /// List the issues found in `text`
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, ServiceError>;

    /// Corrected version of `text`
    async fn suggest(&self, text: &str) -> Result<String, ServiceError> {
        let issues = self.check(text).await?;
        Ok(apply_corrections(text, &issues))
    }
}

/// Join issue messages into one feedback string
pub fn feedback_from(issues: &[GrammarIssue]) -> String {
    if issues.is_empty() {
        return LOOKS_GOOD.to_string();
    }

    issues
        .iter()
        .map(|issue| issue.message.trim())
        .filter(|message| !message.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply the first replacement of every issue; overlapping issues keep the earliest one
pub fn apply_corrections(text: &str, issues: &[GrammarIssue]) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    let mut ordered: Vec<&GrammarIssue> = issues
        .iter()
        .filter(|issue| !issue.replacements.is_empty())
        .collect();
    ordered.sort_by_key(|issue| issue.offset);

    let mut selected = Vec::with_capacity(ordered.len());
    let mut covered_until = 0;
    for issue in ordered {
        let end = issue.offset + issue.length;
        if issue.offset < covered_until || end > chars.len() {
            continue;
        }
        selected.push(issue);
        covered_until = end;
    }

    // Right to left so earlier offsets stay valid
    for issue in selected.into_iter().rev() {
        let end = issue.offset + issue.length;
        chars.splice(issue.offset..end, issue.replacements[0].chars());
    }

    chars.into_iter().collect()
}

/// LanguageTool `/v2/check` client
#[derive(Clone)]
pub struct LanguageToolChecker {
    client: reqwest::Client,
    api_url: String,
    language: String,
}

#[derive(Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<CheckMatch>,
}

#[derive(Deserialize)]
struct CheckMatch {
    message: String,
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<Replacement>,
}

#[derive(Deserialize)]
struct Replacement {
    value: String,
}

impl From<CheckMatch> for GrammarIssue {
    fn from(m: CheckMatch) -> Self {
        GrammarIssue {
            message: m.message,
            offset: m.offset,
            length: m.length,
            replacements: m.replacements.into_iter().map(|r| r.value).collect(),
        }
    }
}

impl LanguageToolChecker {
    pub fn new(client: reqwest::Client, api_url: String, language: String) -> Self {
        Self {
            client,
            api_url,
            language,
        }
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolChecker {
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, ServiceError> {
        let params = [("text", text), ("language", self.language.as_str())];

        let response = self.client.post(&self.api_url).form(&params).send().await?;

        let body: CheckResponse = ensure_success(response)?
            .json()
            .await
            .map_err(|e| ServiceError::ApiError(format!("Failed to parse response: {}", e)))?;

        tracing::debug!(issues = body.matches.len(), "grammar check finished");

        Ok(body.matches.into_iter().map(GrammarIssue::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(message: &str, offset: usize, length: usize, replacement: &str) -> GrammarIssue {
        GrammarIssue {
            message: message.to_string(),
            offset,
            length,
            replacements: vec![replacement.to_string()],
        }
    }

    #[test]
    fn parses_languagetool_matches() {
        let json = r#"{
            "software": { "name": "LanguageTool" },
            "matches": [
                {
                    "message": "Possible spelling mistake found.",
                    "offset": 2,
                    "length": 3,
                    "replacements": [{ "value": "ate" }, { "value": "eat" }],
                    "rule": { "id": "MORFOLOGIK_RULE_EN_US" }
                }
            ]
        }"#;
        let body: CheckResponse = serde_json::from_str(json).unwrap();
        let issues: Vec<GrammarIssue> = body.matches.into_iter().map(GrammarIssue::from).collect();

        assert_eq!(issues, vec![GrammarIssue {
            message: "Possible spelling mistake found.".to_string(),
            offset: 2,
            length: 3,
            replacements: vec!["ate".to_string(), "eat".to_string()],
        }]);
    }

    #[test]
    fn no_issues_looks_good() {
        assert_eq!(feedback_from(&[]), LOOKS_GOOD);
    }

    #[test]
    fn joins_issue_messages() {
        let issues = vec![
            issue("First problem.", 0, 1, "x"),
            issue("Second problem.", 2, 1, "y"),
        ];
        assert_eq!(feedback_from(&issues), "First problem.\nSecond problem.");
    }

    #[test]
    fn applies_replacements_right_to_left() {
        let text = "He go to school yesterday and eat lunch.";
        let issues = vec![issue("verb", 3, 2, "went"), issue("verb", 30, 3, "ate")];
        assert_eq!(
            apply_corrections(text, &issues),
            "He went to school yesterday and ate lunch."
        );
    }

    #[test]
    fn skips_overlapping_and_out_of_range_issues() {
        let text = "abcdef";
        let issues = vec![
            issue("a", 1, 3, "X"),
            issue("b", 2, 3, "Y"),
            issue("c", 5, 10, "Z"),
        ];
        assert_eq!(apply_corrections(text, &issues), "aXef");
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let text = "café teh";
        let issues = vec![issue("typo", 5, 3, "tea")];
        assert_eq!(apply_corrections(text, &issues), "café tea");
    }
}
