use std::collections::HashMap;

use crate::error::Result;
use crate::models::{CorpusOrigin, Entry, EntryView, SearchRequest};
use crate::search;

use super::PayVault;

impl PayVault {
    /// The searchable corpus: the remote cache when it holds anything,
    /// otherwise the embedded catalog, followed by the user's entries.
    /// Ids are unique; a later duplicate replaces the earlier one in place.
    pub fn corpus(&self) -> Result<Vec<Entry>> {
        let (_, base) = self.base_entries()?;
        let mut entries = base;
        entries.extend(self.state.list_user_entries()?);
        Ok(dedup_last_write_wins(entries))
    }

    pub(super) fn base_entries(&self) -> Result<(CorpusOrigin, Vec<Entry>)> {
        let cached = self.state.list_remote_entries()?;
        if !cached.is_empty() {
            return Ok((CorpusOrigin::Remote, cached));
        }
        let embedded = self.embedded.load().entries;
        if embedded.is_empty() {
            Ok((CorpusOrigin::Empty, embedded))
        } else {
            Ok((CorpusOrigin::Embedded, embedded))
        }
    }

    pub fn search(&self, request: &SearchRequest) -> Result<Vec<EntryView>> {
        let corpus = self.corpus()?;
        let favorites = self.state.favorite_set()?;
        let views = search::search(&corpus, &request.query, &request.filter, request.mode)
            .into_iter()
            .map(|entry| EntryView::new(entry.clone(), favorites.contains(&entry.id)))
            .collect::<Vec<_>>();

        let mut views = search::sort_views(views, request.sort);
        if let Some(limit) = request.limit {
            views.truncate(limit);
        }
        tracing::debug!(
            query = %request.query,
            mode = request.mode.as_str(),
            sort = request.sort.as_str(),
            corpus = corpus.len(),
            hits = views.len(),
            "search completed"
        );
        Ok(views)
    }

    pub fn categories(&self) -> Result<Vec<String>> {
        Ok(search::categories(&self.corpus()?))
    }

    pub fn subcategories(&self, category: &str) -> Result<Vec<String>> {
        Ok(search::subcategories(&self.corpus()?, category))
    }
}

fn dedup_last_write_wins(entries: Vec<Entry>) -> Vec<Entry> {
    let mut positions = HashMap::<String, usize>::with_capacity(entries.len());
    let mut out = Vec::<Entry>::with_capacity(entries.len());
    for entry in entries {
        if let Some(&position) = positions.get(&entry.id) {
            out[position] = entry;
        } else {
            positions.insert(entry.id.clone(), out.len());
            out.push(entry);
        }
    }
    out
}
