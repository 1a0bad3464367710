use std::sync::Once;

use overwatch_core::{update, AnalysisStatus, AppState, ModelHint, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

#[test]
fn submit_requires_a_url() {
    init_logging();
    let state = AppState::new();
    assert!(!state.view().can_submit);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().status, AnalysisStatus::Idle);
}

#[test]
fn whitespace_only_url_does_not_submit() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::VideoUrlChanged("   ".to_string()));
    assert!(!state.view().can_submit);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().status, AnalysisStatus::Idle);
}

#[test]
fn form_edits_are_ignored_while_running() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::VideoUrlChanged("https://example.com/a.mp4".to_string()),
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    assert!(state.view().form_locked);

    let (state, _) = update(state, Msg::VideoUrlChanged("https://other".to_string()));
    let (state, _) = update(state, Msg::OutputDirChanged("/tmp".to_string()));
    let (state, _) = update(state, Msg::ModelHintChanged(ModelHint::Fast));

    let view = state.view();
    assert_eq!(view.video_url, "https://example.com/a.mp4");
    assert_eq!(view.output_dir, "./out");
    assert_eq!(view.model_hint, ModelHint::Default);
}

#[test]
fn url_hint_flags_unparseable_input_without_gating() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.view().url_hint, None);

    let (state, _) = update(state, Msg::VideoUrlChanged("notaurl".to_string()));
    let view = state.view();
    assert!(view.url_hint.is_some());
    // The hint is advice only; the form still submits.
    assert!(view.can_submit);

    let (state, _) = update(
        state,
        Msg::VideoUrlChanged("https://example.com/v.mp4".to_string()),
    );
    assert_eq!(state.view().url_hint, None);
}

#[test]
fn output_dir_defaults_and_edits() {
    init_logging();
    let mut state = AppState::new();
    assert_eq!(state.view().output_dir, "./out");
    assert!(!state.consume_dirty());

    let (mut state, effects) = update(state, Msg::OutputDirChanged("./runs".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.view().output_dir, "./runs");
    assert!(state.consume_dirty());
}
