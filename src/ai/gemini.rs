//! Gemini advisory client
//!
//! Calls the Google Generative Language API to classify a transaction and
//! parses the model's line-oriented reply. Any transport or parse failure
//! yields the Unknown fallback instead of an error.

use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::models::Advice;

use super::{Advisor, AdviceRequest};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const UA: &str = concat!(
    "fintrack/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/fintrack-cli/fintrack)"
);

/// Advisor backed by the Gemini generateContent endpoint
pub struct GeminiAdvisor {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiAdvisor {
    /// Create a new Gemini advisor
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> FintrackResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()
            .map_err(|e| FintrackError::Adapter(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn call(&self, prompt: String) -> FintrackResult<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| FintrackError::Adapter(format!("Gemini request failed: {}", e)))?;

        let parsed: GenerateResponse = resp
            .json()
            .map_err(|e| FintrackError::Adapter(format!("Gemini response unreadable: {}", e)))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| FintrackError::Adapter("Gemini response had no candidates".into()))
    }
}

impl Advisor for GeminiAdvisor {
    fn analyze(&self, request: &AdviceRequest) -> Advice {
        let prompt = build_prompt(request);
        let context = request.combined_context();

        match self.call(prompt) {
            Ok(text) => {
                parse_advice(&text, &context).unwrap_or_else(|| Advice::unknown(context))
            }
            Err(_) => Advice::unknown(context),
        }
    }
}

/// Build the line-oriented analysis prompt
fn build_prompt(request: &AdviceRequest) -> String {
    let mut prompt = format!(
        "You are a personal finance advisor. Analyze this transaction and \
         respond with exactly three lines:\n\
         Classification: <Necessary|Unnecessary|Savings|Income>\n\
         Reason: <one short sentence>\n\
         Recommendation: <one short sentence>\n\
         \n\
         Transaction:\n\
         Type: {}\n\
         Description: {}\n\
         Category: {}\n\
         Amount: {}\n",
        request.kind, request.description, request.category, request.amount
    );

    let context = request.combined_context();
    if !context.trim().is_empty() {
        prompt.push_str(&format!("Context: {}\n", context));
    }

    prompt
}

/// Parse the model's line-oriented reply into structured advice
///
/// Returns None when no classification line is present; reason and
/// recommendation lines are optional and default to empty strings.
fn parse_advice(text: &str, context: &str) -> Option<Advice> {
    let mut classification = None;
    let mut reason = None;
    let mut recommendation = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(value) = strip_label(line, "classification:") {
            classification.get_or_insert(value);
        } else if let Some(value) = strip_label(line, "reason:") {
            reason.get_or_insert(value);
        } else if let Some(value) = strip_label(line, "recommendation:") {
            recommendation.get_or_insert(value);
        }
    }

    classification.map(|classification| Advice {
        classification,
        reason: reason.unwrap_or_default(),
        recommendation: recommendation.unwrap_or_default(),
        context: context.to_string(),
    })
}

fn strip_label(line: &str, label: &str) -> Option<String> {
    let prefix = line.get(..label.len())?;
    if !prefix.eq_ignore_ascii_case(label) {
        return None;
    }
    let value = line[label.len()..].trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    fn request() -> AdviceRequest {
        AdviceRequest {
            kind: TransactionKind::Expense,
            description: "Concert tickets".to_string(),
            category: "Entertainment".to_string(),
            amount: Money::from_cents(12_000),
            context: String::new(),
            custom_context: Some("saving for a trip".to_string()),
        }
    }

    #[test]
    fn test_build_prompt_includes_fields() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Type: Expense"));
        assert!(prompt.contains("Description: Concert tickets"));
        assert!(prompt.contains("Amount: $120.00"));
        assert!(prompt.contains("Context: saving for a trip"));
    }

    #[test]
    fn test_parse_advice_full_reply() {
        let text = "Classification: Unnecessary\n\
                    Reason: Entertainment is discretionary spending.\n\
                    Recommendation: Put this toward your trip instead.";
        let advice = parse_advice(text, "saving for a trip").unwrap();
        assert_eq!(advice.classification, "Unnecessary");
        assert_eq!(advice.reason, "Entertainment is discretionary spending.");
        assert_eq!(
            advice.recommendation,
            "Put this toward your trip instead."
        );
        assert_eq!(advice.context, "saving for a trip");
    }

    #[test]
    fn test_parse_advice_ignores_case_and_extra_prose() {
        let text = "Sure! Here is my analysis.\n\
                    CLASSIFICATION: Necessary\n\
                    reason: Food is essential.";
        let advice = parse_advice(text, "").unwrap();
        assert_eq!(advice.classification, "Necessary");
        assert_eq!(advice.reason, "Food is essential.");
        assert_eq!(advice.recommendation, "");
    }

    #[test]
    fn test_parse_advice_missing_classification_is_none() {
        let text = "Here are my thoughts on your purchase...";
        assert!(parse_advice(text, "").is_none());
    }

    #[test]
    fn test_client_construction() {
        assert!(GeminiAdvisor::new("some-key", "gemini-1.5-flash").is_ok());
    }

    #[test]
    fn test_empty_reply_parses_to_none() {
        assert!(parse_advice("", "ctx").is_none());
    }
}
