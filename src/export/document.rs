//! Renderer-agnostic document model. `render` folds a session snapshot
//! into this structure; each sink formats it without re-deriving
//! anything, so preview, download, and print can never drift apart.

use crate::catalog::{ActivityType, Cadence, EngagementKind};
use crate::session::Session;

/// Placeholder text for empty free-text answers.
pub const NOT_PROVIDED: &str = "Not provided";

/// Placeholder text for a cadence group with no entries.
pub const NO_ITEMS: &str = "No items";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub check_in: Vec<Field>,
    pub plan: Vec<CadenceGroup>,
    pub vps: Vec<Field>,
}

/// A labeled free-text answer. `None` means the user left it empty and
/// the sink must emit the explicit placeholder, never drop the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: Option<String>,
}

impl Field {
    fn new(label: &'static str, value: &str) -> Self {
        let trimmed = value.trim();
        Self {
            label,
            value: (!trimmed.is_empty()).then(|| value.to_string()),
        }
    }
}

/// One cadence's worth of plan entries, in insertion order. Present for
/// all five cadences even when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CadenceGroup {
    pub cadence: Cadence,
    pub entries: Vec<DocEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocEntry {
    pub title: String,
    pub activity: ActivityType,
    pub kind: EngagementKind,
    pub description: String,
}

/// Pure fold of the session snapshot into a document. Deterministic:
/// identical snapshots produce identical documents, with no timestamps
/// or other ambient inputs.
pub fn render(session: &Session, title: &str) -> Document {
    let check_in = vec![
        Field::new("Enthusiasm", &session.check_in.enthusiasm),
        Field::new("Sensing", &session.check_in.sensing),
        Field::new("Prayer/Scripture", &session.check_in.scripture),
    ];

    let plan = Cadence::ALL
        .iter()
        .map(|&cadence| CadenceGroup {
            cadence,
            entries: session
                .plan
                .bucket(cadence)
                .iter()
                .map(|entry| DocEntry {
                    title: entry.title.clone(),
                    activity: entry.activity,
                    kind: entry.kind,
                    description: entry.description.clone(),
                })
                .collect(),
        })
        .collect();

    let vps = vec![
        Field::new("Vision", &session.vps.vision),
        Field::new("People", &session.vps.people),
        Field::new("Structure", &session.vps.structure),
    ];

    Document {
        title: title.to_string(),
        check_in,
        plan,
        vps,
    }
}
