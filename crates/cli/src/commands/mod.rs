use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub mod auth;
pub mod parts;
pub mod workshop;

/// Спиннер на время сетевого запроса
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
