//! Overwatch core: pure state machine and view-model helpers.
mod effect;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use model::{AnalysisPayload, AnalysisResult, AnalysisStatus, JobId, ModelHint, RunId};
pub use msg::Msg;
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ChecklistItemView, CHECKLIST_STAGES};
