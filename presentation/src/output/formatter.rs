//! Output formatter trait

use sanctuary_domain::AggregatedAnswer;

/// Trait for formatting aggregated answers
pub trait OutputFormatter {
    /// Format the joined answer as the API returns it
    fn format(&self, answer: &AggregatedAnswer) -> String;

    /// Format each fragment under its source heading
    fn format_fragments(&self, answer: &AggregatedAnswer) -> String;

    /// Format as JSON
    fn format_json(&self, answer: &AggregatedAnswer) -> String;
}
