use crate::state::{StoriesAction, StoriesState};

/// What: Compute the next stories state for `action`.
///
/// Inputs:
/// - `state`: Current state, taken by value
/// - `action`: Action to apply
///
/// Output:
/// - The next state. `data` is only replaced on `FetchSuccess` and only filtered on `RemoveStory`.
///
/// Details:
/// - `FetchSuccess` replaces `data` for unpaginated results and page 0, otherwise appends
///   the page verbatim (duplicate ids across pages are kept).
/// - `RemoveStory` drops every entry with the same `object_id`, not just the first one.
#[must_use]
pub fn stories_reducer(state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState {
            is_loading: true,
            is_error: false,
            ..state
        },
        StoriesAction::FetchSuccess(payload) => {
            let data = match payload.page {
                None | Some(0) => payload.list,
                Some(_) => {
                    let mut data = state.data;
                    data.extend(payload.list);
                    data
                }
            };
            StoriesState {
                data,
                is_loading: false,
                is_error: false,
                page: payload.page,
            }
        }
        StoriesAction::FetchFailure => StoriesState {
            is_loading: false,
            is_error: true,
            ..state
        },
        StoriesAction::RemoveStory(story) => {
            let mut data = state.data;
            data.retain(|s| s.object_id != story.object_id);
            debug_assert!(!data.iter().any(|s| s.object_id == story.object_id));
            StoriesState { data, ..state }
        }
    }
}
