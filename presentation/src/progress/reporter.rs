//! Progress reporting while an answer is being aggregated

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the upstream lookups are in flight
pub struct LookupSpinner {
    bar: ProgressBar,
}

impl LookupSpinner {
    /// Start spinning with `message`; a hidden spinner prints nothing.
    pub fn start(message: &str, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(Self::spinner_style());
        bar.set_prefix("Sanctuary");
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Stop the spinner and leave a one-line summary behind.
    pub fn finish(self, total: usize, failures: usize) {
        let summary = if failures == 0 {
            format!("{} {} sources answered", "v".green(), total)
        } else {
            format!(
                "{} {} of {} sources failed",
                "x".red(),
                failures,
                total
            )
        };
        self.bar.finish_with_message(summary);
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner() {
        let spinner = LookupSpinner::start("Consulting sources...", false);
        assert!(spinner.is_hidden());
        spinner.finish(4, 1);
    }
}
