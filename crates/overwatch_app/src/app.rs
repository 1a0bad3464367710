use std::time::Duration;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use overwatch_client::ClientSettings;
use overwatch_core::{update, AnalysisStatus, AppState, ModelHint, Msg};

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::ui;

/// How long one pump iteration waits for a client event before ticking.
const EVENT_WAIT: Duration = Duration::from_millis(75);

enum NextAction {
    RunAnother,
    Reset,
    Quit,
}

pub fn run(config: AppConfig) -> Result<()> {
    let settings = ClientSettings {
        base_url: config.api_base_url.clone(),
        poll_interval: config.poll_interval,
        ..ClientSettings::default()
    };
    let runner = EffectRunner::new(settings)?;
    let mut state = AppState::new();

    ui::print_banner(&config);

    loop {
        state = prompt_form(state, &runner)?;

        if state.view().status != AnalysisStatus::Running {
            // Submission was gated; ask again.
            println!("A video URL is required.");
            continue;
        }

        state = drive_to_terminal(state, &runner);
        ui::print_lines(&ui::result_lines(&state.view()));
        println!();

        match prompt_next_action()? {
            NextAction::RunAnother => continue,
            NextAction::Reset => {
                // The next submission would clear this run anyway; an
                // explicit reset also cancels anything still in flight.
                state = apply(state, Msg::ResetClicked, &runner);
                continue;
            }
            NextAction::Quit => break,
        }
    }

    Ok(())
}

fn apply(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.dispatch(effects);
    state
}

fn prompt_form(mut state: AppState, runner: &EffectRunner) -> Result<AppState> {
    let theme = ColorfulTheme::default();

    let video_url: String = Input::with_theme(&theme)
        .with_prompt("Video URL")
        .with_initial_text(state.view().video_url)
        .interact_text()?;
    state = apply(state, Msg::VideoUrlChanged(video_url), runner);

    if let Some(hint) = state.view().url_hint {
        println!("  {}", console::style(hint).yellow());
    }

    let output_dir: String = Input::with_theme(&theme)
        .with_prompt("Output folder")
        .default(state.view().output_dir)
        .interact_text()?;
    state = apply(state, Msg::OutputDirChanged(output_dir), runner);

    let hints = ModelHint::ALL;
    let labels: Vec<&str> = hints.iter().map(|hint| hint.label()).collect();
    let current = hints
        .iter()
        .position(|hint| *hint == state.view().model_hint)
        .unwrap_or(0);
    let picked = Select::with_theme(&theme)
        .with_prompt("Model preset")
        .items(&labels)
        .default(current)
        .interact()?;
    state = apply(state, Msg::ModelHintChanged(hints[picked]), runner);

    Ok(apply(state, Msg::SubmitClicked, runner))
}

/// Pumps client events through the state machine until the run reaches a
/// terminal state, painting progress as it goes.
fn drive_to_terminal(mut state: AppState, runner: &EffectRunner) -> AppState {
    let bar = ui::progress_bar();
    let mut lit = 0;

    // The full pipeline checklist up front; items are re-printed lit as
    // the reported progress crosses their thresholds.
    for line in ui::checklist_lines(&state.view()) {
        bar.println(line);
    }

    loop {
        if state.consume_dirty() {
            let view = state.view();
            bar.set_position(u64::from(view.progress));
            bar.set_message(view.status_line);

            let done = view.checklist.iter().filter(|item| item.done).count();
            for item in view.checklist.iter().filter(|item| item.done).skip(lit) {
                bar.println(ui::checklist_item_line(item.label));
            }
            lit = lit.max(done);
        }

        let view = state.view();
        match view.status {
            AnalysisStatus::Completed => {
                bar.finish_with_message(view.status_line);
                println!();
                return state;
            }
            AnalysisStatus::Error => {
                bar.abandon_with_message(view.status_line);
                if let Some(message) = &view.error {
                    println!("{}", ui::error_line(message));
                }
                println!();
                return state;
            }
            AnalysisStatus::Idle | AnalysisStatus::Running => {}
        }

        match runner.next_msg(EVENT_WAIT) {
            Some(msg) => state = apply(state, msg, runner),
            None => state = apply(state, Msg::Tick, runner),
        }
    }
}

fn prompt_next_action() -> Result<NextAction> {
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Next")
        .items(&["Run another analysis", "Reset", "Quit"])
        .default(0)
        .interact()?;

    Ok(match picked {
        0 => NextAction::RunAnother,
        1 => NextAction::Reset,
        _ => NextAction::Quit,
    })
}
