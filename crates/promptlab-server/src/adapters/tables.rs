//! In-memory tables shared by the storage backends

use std::collections::HashMap;

use promptlab::{Collection, Prompt};

/// Canonical copies of every entity, keyed by id
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub prompts: HashMap<String, Prompt>,
    pub collections: HashMap<String, Collection>,
}

impl Tables {
    /// Replace an existing prompt; `None` if the id is unknown
    pub fn replace_prompt(&mut self, id: &str, prompt: Prompt) -> Option<Prompt> {
        let slot = self.prompts.get_mut(id)?;
        *slot = prompt.clone();
        Some(prompt)
    }

    /// Prompts ordered by creation time, id as tie-break
    pub fn prompts_in_order(&self) -> Vec<&Prompt> {
        let mut prompts: Vec<&Prompt> = self.prompts.values().collect();
        prompts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        prompts
    }

    /// Collections ordered by creation time, id as tie-break
    pub fn collections_in_order(&self) -> Vec<&Collection> {
        let mut collections: Vec<&Collection> = self.collections.values().collect();
        collections.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        collections
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn clear(&mut self) {
        self.prompts.clear();
        self.collections.clear();
    }
}
