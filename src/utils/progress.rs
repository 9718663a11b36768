use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar for frame export
pub struct ProgressReporter {
    progress_bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total: u64, message: &str) -> Self {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { progress_bar: pb }
    }

    pub fn increment(&self, delta: u64) {
        self.progress_bar.inc(delta);
    }

    pub fn set_message(&self, message: &str) {
        self.progress_bar.set_message(message.to_string());
    }

    pub fn finish_with_message(&self, message: &str) {
        self.progress_bar.finish_with_message(message.to_string());
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.progress_bar.is_finished() {
            self.progress_bar.finish();
        }
    }
}
