//! Pure view-model-to-text rendering. No IO here; the run loop decides
//! where the lines go.

use console::style;

use overwatch_core::AppViewModel;

pub fn checklist_item_line(label: &str) -> String {
    format!("  {} {label}", style("✔").green())
}

pub fn checklist_lines(view: &AppViewModel) -> Vec<String> {
    view.checklist
        .iter()
        .map(|item| {
            if item.done {
                checklist_item_line(item.label)
            } else {
                format!("  {} {}", style("·").dim(), style(item.label).dim())
            }
        })
        .collect()
}

pub fn error_line(message: &str) -> String {
    format!("{} {message}", style("Error:").red().bold())
}

fn section_lines(title: &str, items: &[String]) -> Vec<String> {
    let mut lines = vec![format!("{}", style(title).bold())];
    if items.is_empty() {
        lines.push(format!("  {}", style("No data").dim()));
    } else {
        for item in items {
            lines.push(format!("  - {item}"));
        }
    }
    lines.push(String::new());
    lines
}

/// The result panel: transcript, the four findings sections, and the
/// pipeline log when there is one.
pub fn result_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![
        format!("{}", style("Transcript + Signals").bold().underlined()),
        String::new(),
    ];

    let Some(result) = &view.result else {
        let placeholder = view.result_placeholder.unwrap_or("No run yet.");
        lines.push(format!("  {}", style(placeholder).dim()));
        return lines;
    };

    lines.push(format!("{}", style("Transcript").bold()));
    if result.transcript.is_empty() {
        lines.push(format!("  {}", style("No data").dim()));
    } else {
        for line in result.transcript.lines() {
            lines.push(format!("  {line}"));
        }
    }
    lines.push(String::new());

    lines.extend(section_lines(
        "Cheating Indicators",
        &result.cheating_indicators,
    ));
    lines.extend(section_lines("Keyboard Sounds", &result.keyboard_findings));
    lines.extend(section_lines("Behavior Summary", &result.behavior_summary));
    lines.extend(section_lines("OpenFace Insights", &result.openface_insights));

    if !result.log.is_empty() {
        lines.extend(section_lines("Pipeline log", &result.log));
    }

    lines
}
