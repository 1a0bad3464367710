use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::VideoUrlChanged(value) => {
            if !state.is_running() {
                state.set_video_url(value);
            }
            Vec::new()
        }
        Msg::OutputDirChanged(value) => {
            if !state.is_running() {
                state.set_output_dir(value);
            }
            Vec::new()
        }
        Msg::ModelHintChanged(value) => {
            if !state.is_running() {
                state.set_model_hint(value);
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Gate: an empty URL or an active run never submits.
            if !state.can_submit() {
                return (state, Vec::new());
            }
            let payload = state.payload();
            let run = state.begin_run();
            vec![Effect::StartAnalysis { run, payload }]
        }
        Msg::ResetClicked => {
            state.reset_run();
            vec![Effect::CancelAnalysis]
        }
        Msg::JobProgress { run, progress } => {
            state.apply_progress(run, progress);
            Vec::new()
        }
        Msg::JobCompleted { run, result } => {
            state.apply_completed(run, result);
            Vec::new()
        }
        Msg::JobFailed {
            run,
            progress,
            message,
        } => {
            state.apply_failed(run, progress, message);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
