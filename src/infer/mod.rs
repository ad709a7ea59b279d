//! Quantity inference from free-text job descriptions.
//!
//! A description goes to the configured model with a prompt listing the
//! catalog materials; the reply comes back as `name: quantity` lines and is
//! parsed defensively. Inferred values are untrusted input — they pass
//! through the same catalog resolution as anything typed by hand.

pub mod document;
mod parser;

pub use document::load_description;
pub use parser::{ParsedQuantities, QuantityEntry, SkippedLine, parse_quantities};

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::InferenceError;
use crate::estimate::MaterialCatalog;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};

/// Names the model may use for the labor line. Matched after trimming and
/// lowercasing, same as catalog keys.
const LABOR_KEYS: &[&str] = &["labor hours", "labor hours (total)", "total labor hours"];

/// Quantities inferred from one job description.
#[derive(Debug, Clone)]
pub struct InferredJob {
    /// Material quantities, in response order, labor removed.
    pub quantities: Vec<QuantityEntry>,
    /// Labor hours, when the model supplied them.
    pub labor_hours: Option<Decimal>,
    /// Response lines that failed to parse.
    pub skipped: Vec<SkippedLine>,
    /// The raw model response, for display alongside the estimate.
    pub raw_response: String,
}

/// Infers material quantities from job descriptions.
pub struct QuantityInference {
    llm: Arc<dyn LlmProvider>,
}

impl QuantityInference {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Ask the model for quantities of the catalog's materials plus labor
    /// hours, then parse its reply.
    pub async fn infer(
        &self,
        description: &str,
        catalog: &MaterialCatalog,
    ) -> Result<InferredJob, InferenceError> {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(description, catalog)),
        ])
        .with_max_tokens(1024)
        .with_temperature(0.2);

        let response = self.llm.complete(request).await?;
        if response.content.trim().is_empty() {
            return Err(InferenceError::EmptyResponse);
        }

        tracing::debug!(provider = self.llm.name(), "received inference response");
        Ok(split_labor(
            parse_quantities(&response.content),
            response.content,
        ))
    }
}

const SYSTEM_PROMPT: &str = "You are an experienced construction estimator. \
Reply with one item per line in the exact form `name: quantity`, using the \
material names you were given. No other text.";

/// Build the user prompt: the job description plus the materials we can
/// price, so the reply lines match catalog keys.
fn build_prompt(description: &str, catalog: &MaterialCatalog) -> String {
    let mut prompt = String::from(
        "Based on the job description below, estimate quantities for the following:\n",
    );
    for (name, _) in catalog.entries() {
        prompt.push_str("- ");
        prompt.push_str(&name);
        prompt.push('\n');
    }
    prompt.push_str("- labor hours (total)\n\nJob description:\n");
    prompt.push_str(description);
    prompt
}

/// Pull the labor line out of the parsed pairs; everything else is a
/// material quantity.
fn split_labor(parsed: ParsedQuantities, raw_response: String) -> InferredJob {
    let mut quantities = Vec::with_capacity(parsed.entries.len());
    let mut labor_hours = None;

    for entry in parsed.entries {
        let key = entry.name.trim().to_lowercase();
        if LABOR_KEYS.contains(&key.as_str()) {
            labor_hours = Some(entry.quantity);
        } else {
            quantities.push(entry);
        }
    }

    InferredJob {
        quantities,
        labor_hours,
        skipped: parsed.skipped,
        raw_response,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::error::LlmError;
    use crate::llm::{CompletionResponse, FinishReason};

    use super::*;

    struct CannedProvider {
        content: &'static str,
    }

    #[async_trait::async_trait]
    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                content: self.content.to_string(),
                finish_reason: FinishReason::Stop,
            })
        }
    }

    #[test]
    fn infer_resolves_quantities_and_labor() {
        let provider = Arc::new(CannedProvider {
            content: "2x4: 80\nNails: a few\nlabor hours (total): 24",
        });
        let inference = QuantityInference::new(provider);

        let job = tokio_test::block_on(inference.infer("Frame a wall.", &MaterialCatalog::builtin()))
            .unwrap();

        assert_eq!(job.labor_hours, Some(dec!(24)));
        assert_eq!(job.quantities, vec![QuantityEntry {
            name: "2x4".to_string(),
            quantity: dec!(80),
        }]);
        assert_eq!(job.skipped.len(), 1);
    }

    #[test]
    fn blank_model_response_is_an_error() {
        let provider = Arc::new(CannedProvider { content: "  \n " });
        let inference = QuantityInference::new(provider);

        let err = tokio_test::block_on(inference.infer("x", &MaterialCatalog::builtin()))
            .unwrap_err();
        assert!(matches!(err, InferenceError::EmptyResponse));
    }

    #[test]
    fn prompt_lists_catalog_materials_and_labor() {
        let prompt = build_prompt("Build a shed.", &MaterialCatalog::builtin());

        assert!(prompt.contains("- 2x4\n"));
        assert!(prompt.contains("- concrete (per bag)\n"));
        assert!(prompt.contains("- labor hours (total)"));
        assert!(prompt.ends_with("Build a shed."));
    }

    #[test]
    fn labor_hours_are_routed_out_of_materials() {
        let parsed = parse_quantities("2x4: 80\nLabor Hours: 24\ndrywall sheet: 12");
        let job = split_labor(parsed, String::new());

        assert_eq!(job.labor_hours, Some(dec!(24)));
        assert_eq!(job.quantities.len(), 2);
        assert!(job.quantities.iter().all(|e| e.name != "Labor Hours"));
    }

    #[test]
    fn missing_labor_line_leaves_hours_unset() {
        let job = split_labor(parse_quantities("2x4: 80"), String::new());
        assert_eq!(job.labor_hours, None);
        assert_eq!(job.quantities.len(), 1);
    }
}
