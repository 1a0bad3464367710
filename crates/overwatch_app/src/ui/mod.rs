mod render;

pub use render::{checklist_item_line, checklist_lines, error_line, result_lines};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::AppConfig;

/// Prints the session header once at startup.
pub fn print_banner(config: &AppConfig) {
    println!("{}", style("Overwatch").cyan().bold());
    println!(
        "Video review console for the analysis engine at {}",
        style(&config.api_base_url).underlined()
    );
    println!();
}

/// Progress bar over the 0-100 number the engine reports.
pub fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    bar
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
