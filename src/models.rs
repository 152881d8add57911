use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical tender record published to the data feed.
///
/// All six required fields are guaranteed non-empty by the normalizer;
/// `region` and `url` serialize as `null` when absent so the artifact shape
/// stays stable for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTender {
    pub tender_id: String,
    pub name: String,
    pub buyer: String,
    pub status: String,
    pub published_at: String,
    pub close_at: String,
    pub region: Option<String>,
    pub url: Option<String>,
}

/// Run metadata written alongside the tender list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMeta {
    pub timestamp: String,
    pub total: usize,
}

/// Accumulates normalized tenders keyed by identifier across the fetched days.
///
/// Inserting a tender whose id is already present overwrites the earlier
/// record (no merge), so the chronologically latest day processed wins.
#[derive(Debug, Default)]
pub struct TenderCollection {
    by_id: BTreeMap<String, NormalizedTender>,
}

impl TenderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tender: NormalizedTender) {
        self.by_id.insert(tender.tender_id.clone(), tender);
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Consumes the collection and returns the tenders sorted ascending by
    /// `close_at`. ISO-8601 strings compare lexically in chronological order.
    /// Ties keep the id order of the underlying map, so identical input
    /// always yields an identical list.
    pub fn into_sorted(self) -> Vec<NormalizedTender> {
        let mut tenders: Vec<NormalizedTender> = self.by_id.into_values().collect();
        tenders.sort_by(|a, b| a.close_at.cmp(&b.close_at));
        tenders
    }
}
