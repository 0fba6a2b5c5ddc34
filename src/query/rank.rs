use super::{MAX_RESULTS, SearchHit, SortKey};
use std::cmp::Reverse;

/// Sorts hits by `sort_by` and truncates to [`MAX_RESULTS`].
///
/// Hits are first put in catalog id order and then stably sorted, so equal keys
/// always keep catalog order, whichever backend gathered them.
pub fn rank(mut hits: Vec<SearchHit>, sort_by: SortKey) -> Vec<SearchHit> {
    hits.sort_by_key(|hit| hit.id);
    match sort_by {
        SortKey::MatchedIngredients => {
            hits.sort_by_key(|hit| Reverse(hit.matched_ingredients.len()))
        }
        SortKey::MissingIngredients => hits.sort_by_key(|hit| hit.missing_ingredients.len()),
        SortKey::TotalTime => hits.sort_by_key(|hit| hit.total_time_minutes),
        SortKey::NumSteps => hits.sort_by_key(|hit| hit.num_steps),
    }
    hits.truncate(MAX_RESULTS);
    hits
}
