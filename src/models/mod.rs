mod state;
mod todo;

pub use state::AppState;
pub use todo::{Todo, TodoDraft, TodoPatch};
