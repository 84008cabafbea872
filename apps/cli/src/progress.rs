//! Console progress rendering: an indicatif spinner behind the
//! `PipelineObserver` seam, so the pipeline itself never touches the
//! terminal.

use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::PipelineObserver;

pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    /// Stops the spinner with a closing line.
    pub fn finish(&self, message: &str) {
        self.spinner.finish_with_message(message.to_string());
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineObserver for CliProgress {
    fn stage_start(&self, label: &str) {
        self.spinner.set_message(format!("{label}..."));
    }

    fn stage_done(&self, label: &str) {
        self.spinner.println(format!("✓ {label}"));
    }
}
