//! Prompt query helpers: sort, filter, search

use crate::domain::entities::Prompt;

/// Order by `created_at` (newest first when `descending`)
///
/// The sort is stable: prompts with equal timestamps keep their input order.
pub fn sort_by_date(mut prompts: Vec<Prompt>, descending: bool) -> Vec<Prompt> {
    if descending {
        prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    } else {
        prompts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    }
    prompts
}

/// Keep prompts whose `collection_id` equals `collection_id` exactly
pub fn filter_by_collection(prompts: Vec<Prompt>, collection_id: &str) -> Vec<Prompt> {
    prompts
        .into_iter()
        .filter(|p| p.collection_id.as_deref() == Some(collection_id))
        .collect()
}

/// Case-insensitive substring match on title, description and content
pub fn search(prompts: Vec<Prompt>, query: &str) -> Vec<Prompt> {
    let query_lower = query.to_lowercase();
    prompts
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query_lower)
                || p
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&query_lower))
                || p.content.to_lowercase().contains(&query_lower)
        })
        .collect()
}
