//! The user's working selection, organized by cadence bucket.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::catalog::{ActivityType, Cadence, CatalogItem, EngagementKind};

/// An independent copy of a catalog item inside the plan. Editing or
/// removing it never touches the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Instance identity, fresh per insertion
    pub id: Uuid,

    /// Id of the catalog item this was copied from
    pub source_id: String,

    pub title: String,
    pub description: String,
    pub activity: ActivityType,
    pub kind: EngagementKind,
}

impl PlanEntry {
    fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            activity: item.activity,
            kind: item.kind,
        }
    }
}

/// Partial edit applied to a plan entry; unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Cadence-bucketed plan. Every canonical cadence key is always present,
/// even when its bucket is empty; insertion order within a bucket is
/// display order. Serializes as a plain cadence-to-entries map; missing
/// keys are restored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Cadence, Vec<PlanEntry>>",
    into = "BTreeMap<Cadence, Vec<PlanEntry>>"
)]
pub struct Plan {
    buckets: BTreeMap<Cadence, Vec<PlanEntry>>,
}

impl From<BTreeMap<Cadence, Vec<PlanEntry>>> for Plan {
    fn from(mut buckets: BTreeMap<Cadence, Vec<PlanEntry>>) -> Self {
        for cadence in Cadence::ALL {
            buckets.entry(cadence).or_default();
        }
        Self { buckets }
    }
}

impl From<Plan> for BTreeMap<Cadence, Vec<PlanEntry>> {
    fn from(plan: Plan) -> Self {
        plan.buckets
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new()
    }
}

impl Plan {
    pub fn new() -> Self {
        Self {
            buckets: Cadence::ALL.iter().map(|&c| (c, Vec::new())).collect(),
        }
    }

    /// Append a fresh copy of `item` to its cadence bucket. Repeated adds
    /// of the same item append further independent copies.
    pub fn add(&mut self, item: &CatalogItem) {
        self.buckets
            .entry(item.cadence)
            .or_default()
            .push(PlanEntry::from_item(item));
    }

    /// Delete the entry at `index` in the given bucket; later entries
    /// shift down by one. Out-of-range indices are ignored.
    pub fn remove(&mut self, cadence: Cadence, index: usize) {
        if let Some(bucket) = self.buckets.get_mut(&cadence) {
            if index < bucket.len() {
                bucket.remove(index);
            }
        }
    }

    /// Merge `patch` into the entry at `index` in the given bucket.
    pub fn update(&mut self, cadence: Cadence, index: usize, patch: EntryPatch) {
        if let Some(entry) = self
            .buckets
            .get_mut(&cadence)
            .and_then(|bucket| bucket.get_mut(index))
        {
            if let Some(title) = patch.title {
                entry.title = title;
            }
            if let Some(description) = patch.description {
                entry.description = description;
            }
        }
    }

    /// Clear every bucket back to empty.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether any copy of the catalog item is currently in the plan.
    /// Recomputed from live contents, so removing the last copy clears it.
    pub fn is_added(&self, source_id: &str) -> bool {
        self.entries().any(|(_, e)| e.source_id == source_id)
    }

    pub fn bucket(&self, cadence: Cadence) -> &[PlanEntry] {
        self.buckets
            .get(&cadence)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All entries in canonical cadence order, tagged with their bucket.
    pub fn entries(&self) -> impl Iterator<Item = (Cadence, &PlanEntry)> {
        self.buckets
            .iter()
            .flat_map(|(&cadence, bucket)| bucket.iter().map(move |e| (cadence, e)))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, cadence: Cadence) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            contributor: "paula".to_string(),
            title: title.to_string(),
            description: String::new(),
            cadence,
            activity: ActivityType::Practice,
            kind: EngagementKind::Conversation,
            media: None,
            transcript: None,
        }
    }

    #[test]
    fn test_new_plan_has_all_five_empty_buckets() {
        let plan = Plan::new();
        for cadence in Cadence::ALL {
            assert!(plan.bucket(cadence).is_empty());
        }
        assert!(plan.is_empty());
    }

    #[test]
    fn test_add_grows_bucket_and_marks_added() {
        let mut plan = Plan::new();
        let x1 = item("x1", "Coffee Chat", Cadence::Monthly);

        plan.add(&x1);
        assert_eq!(plan.bucket(Cadence::Monthly).len(), 1);
        assert_eq!(plan.bucket(Cadence::Monthly)[0].title, "Coffee Chat");
        assert!(plan.is_added("x1"));
        assert!(!plan.is_added("x2"));
    }

    #[test]
    fn test_repeated_add_appends_independent_copies() {
        let mut plan = Plan::new();
        let x1 = item("x1", "Coffee Chat", Cadence::Monthly);

        plan.add(&x1);
        plan.add(&x1);
        let bucket = plan.bucket(Cadence::Monthly);
        assert_eq!(bucket.len(), 2);
        assert_ne!(bucket[0].id, bucket[1].id);
        assert_eq!(bucket[0].source_id, bucket[1].source_id);
    }

    #[test]
    fn test_remove_shifts_later_entries_down() {
        let mut plan = Plan::new();
        for title in ["First", "Second", "Third"] {
            plan.add(&item(&title.to_lowercase(), title, Cadence::Weekly));
        }

        plan.remove(Cadence::Weekly, 1);
        let titles: Vec<&str> = plan
            .bucket(Cadence::Weekly)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Third"]);
    }

    #[test]
    fn test_remove_first_of_two_copies_keeps_second() {
        let mut plan = Plan::new();
        let x1 = item("x1", "Coffee Chat", Cadence::Monthly);
        plan.add(&x1);
        plan.add(&x1);
        let second_id = plan.bucket(Cadence::Monthly)[1].id;

        plan.remove(Cadence::Monthly, 0);
        let bucket = plan.bucket(Cadence::Monthly);
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].id, second_id);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut plan = Plan::new();
        plan.add(&item("x1", "Coffee Chat", Cadence::Monthly));
        plan.remove(Cadence::Monthly, 5);
        plan.remove(Cadence::Daily, 0);
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_update_merges_patch_fields_only() {
        let mut plan = Plan::new();
        let mut source = item("x1", "Coffee Chat", Cadence::Monthly);
        source.description = "Original description".to_string();
        plan.add(&source);

        plan.update(
            Cadence::Monthly,
            0,
            EntryPatch {
                title: Some("Tea Chat".to_string()),
                description: None,
            },
        );
        let entry = &plan.bucket(Cadence::Monthly)[0];
        assert_eq!(entry.title, "Tea Chat");
        assert_eq!(entry.description, "Original description");
        // The catalog item is untouched
        assert_eq!(source.title, "Coffee Chat");
    }

    #[test]
    fn test_reset_restores_five_empty_buckets() {
        let mut plan = Plan::new();
        plan.add(&item("x1", "A", Cadence::Daily));
        plan.add(&item("x2", "B", Cadence::Yearly));

        plan.reset();
        assert!(plan.is_empty());
        for cadence in Cadence::ALL {
            assert!(plan.bucket(cadence).is_empty());
        }
    }

    #[test]
    fn test_added_clears_when_last_copy_removed() {
        let mut plan = Plan::new();
        let x1 = item("x1", "Coffee Chat", Cadence::Monthly);
        plan.add(&x1);
        plan.add(&x1);

        plan.remove(Cadence::Monthly, 0);
        assert!(plan.is_added("x1"));
        plan.remove(Cadence::Monthly, 0);
        assert!(!plan.is_added("x1"));
    }

    #[test]
    fn test_deserialized_plan_restores_missing_buckets() {
        let restored: Plan = serde_json::from_str(r#"{"monthly": []}"#).unwrap();
        for cadence in Cadence::ALL {
            assert!(restored.bucket(cadence).is_empty());
        }
        assert_eq!(restored, Plan::new());
    }

    #[test]
    fn test_entries_iterate_in_canonical_cadence_order() {
        let mut plan = Plan::new();
        plan.add(&item("y", "Yearly Thing", Cadence::Yearly));
        plan.add(&item("d", "Daily Thing", Cadence::Daily));
        plan.add(&item("m", "Monthly Thing", Cadence::Monthly));

        let order: Vec<Cadence> = plan.entries().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Cadence::Daily, Cadence::Monthly, Cadence::Yearly]);
    }
}
