//! Console output formatter for aggregated answers

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use sanctuary_domain::{AggregatedAnswer, AnswerFragment};

/// Formats aggregated answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the joined answer
    pub fn format(answer: &AggregatedAnswer) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Apologetics Answer"));
        output.push('\n');
        output.push_str(&format!("{} {}\n\n", "Question:".cyan().bold(), answer.query));
        output.push_str(&answer.display_text());
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format every fragment with its source and outcome
    pub fn format_fragments(answer: &AggregatedAnswer) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), answer.query));

        for (index, fragment) in answer.fragments.iter().enumerate() {
            let title = format!("── {}. {} ──", index + 1, Self::source_label(fragment));
            let title = if fragment.is_failure() {
                title.red().bold()
            } else {
                title.yellow().bold()
            };
            output.push_str(&format!("\n{}\n{}\n", title, Self::indent(&fragment.render(), "  ")));

            if let Some(error) = fragment.error() {
                output.push_str(&format!("  {} {}\n", "cause:".dimmed(), error));
            }
        }

        let failures = answer.failure_count();
        if failures > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!("{} of {} lookups failed", failures, answer.fragments.len()).red()
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(answer: &AggregatedAnswer) -> String {
        serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string())
    }

    fn source_label(fragment: &AnswerFragment) -> &'static str {
        match fragment {
            AnswerFragment::Generated { .. } => "Generated answer",
            AnswerFragment::Verse { .. } => "Verse",
            AnswerFragment::TopicalLink { .. } => "Topical Bible",
            AnswerFragment::StepBibleLink { .. } => "STEP Bible",
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, answer: &AggregatedAnswer) -> String {
        Self::format(answer)
    }

    fn format_fragments(&self, answer: &AggregatedAnswer) -> String {
        Self::format_fragments(answer)
    }

    fn format_json(&self, answer: &AggregatedAnswer) -> String {
        Self::format_json(answer)
    }
}
