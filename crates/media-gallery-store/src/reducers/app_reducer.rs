use crate::actions::Action;
use crate::reducers::{reduce_galleries, reduce_image_infos, reduce_image_scratch};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Gallery(action) => {
            state.galleries = reduce_galleries(state.galleries, action);
        }
        Action::ImageInfo(action) => {
            state.image_infos = reduce_image_infos(state.image_infos, action);
        }
        Action::ImageScratch(action) => {
            state.image_scratch = reduce_image_scratch(state.image_scratch, action);
        }
        Action::None => {}
    }
    state
}
