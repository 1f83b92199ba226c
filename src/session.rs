//! Session-scoped form state and the snapshot the renderer consumes.
//! Nothing here outlives the process unless the user explicitly saves
//! or exports it.

use serde::{Deserialize, Serialize};

use crate::plan::Plan;

/// Pre-course check-in answers. Free text; empty is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    #[serde(default)]
    pub enthusiasm: String,

    #[serde(default)]
    pub sensing: String,

    #[serde(default)]
    pub scripture: String,
}

/// Vision / People / Structure dialog notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpsNotes {
    #[serde(default)]
    pub vision: String,

    #[serde(default)]
    pub people: String,

    #[serde(default)]
    pub structure: String,
}

/// Everything the export renderer needs, in one serializable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub check_in: CheckIn,

    #[serde(default)]
    pub plan: Plan,

    #[serde(default)]
    pub vps: VpsNotes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_empty() {
        let session = Session::default();
        assert!(session.check_in.enthusiasm.is_empty());
        assert!(session.vps.vision.is_empty());
        assert!(session.plan.is_empty());
    }

    #[test]
    fn test_session_snapshot_round_trips_through_json() {
        let mut session = Session::default();
        session.check_in.enthusiasm = "Three faculty voiced interest".to_string();
        session.vps.structure = "Simple calendar and invites".to_string();

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
