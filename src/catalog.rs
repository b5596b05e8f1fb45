//! Attendance marking for a single session.
//!
//! Edits are applied to the local list first and sent to the backend
//! afterwards; the next full fetch is the only reconciliation.

use serde::Serialize;

use crate::derive::attendance_percentage;
use crate::models::CatalogEntry;

/// Rating given by the star toggle. A rating is either 0 or this value.
pub const STAR_RATING: i32 = 5;

pub fn toggled_rating(current: i32) -> i32 {
    if current == STAR_RATING {
        0
    } else {
        STAR_RATING
    }
}

/// Partial update for one catalog row. Unset fields are left untouched
/// locally and omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_prezent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_profesor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MarkPatch {
    pub fn presence(present: bool) -> Self {
        Self {
            is_prezent: Some(present),
            ..Self::default()
        }
    }

    pub fn rating(rating: i32) -> Self {
        Self {
            rating_profesor: Some(rating),
            ..Self::default()
        }
    }

    pub fn note(note: String) -> Self {
        Self {
            note: Some(note),
            ..Self::default()
        }
    }
}

/// Body of `POST /catalog/mark`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkRequest {
    pub sesiune_id: i64,
    pub inscriere_id: i64,
    #[serde(flatten)]
    pub patch: MarkPatch,
}

/// Apply `patch` to the row for `inscriere_id`. Returns whether anything changed.
pub fn apply_patch(entries: &mut [CatalogEntry], inscriere_id: i64, patch: &MarkPatch) -> bool {
    let Some(entry) = entries.iter_mut().find(|e| e.inscriere_id == inscriere_id) else {
        return false;
    };
    let mut changed = false;
    if let Some(present) = patch.is_prezent {
        if entry.is_prezent != present {
            entry.is_prezent = present;
            changed = true;
        }
    }
    if let Some(rating) = patch.rating_profesor {
        if entry.rating_profesor != rating {
            entry.rating_profesor = rating;
            changed = true;
        }
    }
    if let Some(note) = &patch.note {
        if entry.note.as_deref() != Some(note.as_str()) {
            entry.note = Some(note.clone());
            changed = true;
        }
    }
    changed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub total: usize,
    pub percentage: u32,
}

impl AttendanceSummary {
    pub fn of(entries: &[CatalogEntry]) -> Self {
        let present = entries.iter().filter(|e| e.is_prezent).count();
        let total = entries.len();
        Self {
            present,
            total,
            percentage: attendance_percentage(present, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(inscriere_id: i64, present: bool) -> CatalogEntry {
        CatalogEntry {
            inscriere_id,
            elev_id: inscriere_id * 10,
            nume_elev: format!("Elev {}", inscriere_id),
            is_prezent: present,
            rating_profesor: 0,
            note: None,
        }
    }

    #[test]
    fn test_star_toggle() {
        assert_eq!(toggled_rating(5), 0);
        assert_eq!(toggled_rating(0), 5);
        assert_eq!(toggled_rating(3), 5);
    }

    #[test]
    fn test_presence_is_idempotent() {
        let mut entries = vec![entry(1, true), entry(2, false)];
        let before = entries.clone();
        assert!(!apply_patch(&mut entries, 1, &MarkPatch::presence(true)));
        assert_eq!(entries, before);

        assert!(apply_patch(&mut entries, 2, &MarkPatch::presence(true)));
        assert!(entries[1].is_prezent);
    }

    #[test]
    fn test_patch_only_touches_target_row() {
        let mut entries = vec![entry(1, false), entry(2, false)];
        apply_patch(&mut entries, 2, &MarkPatch::rating(STAR_RATING));
        apply_patch(&mut entries, 2, &MarkPatch::note("A lipsit la test".to_string()));
        assert_eq!(entries[0].rating_profesor, 0);
        assert_eq!(entries[1].rating_profesor, 5);
        assert_eq!(entries[1].note.as_deref(), Some("A lipsit la test"));
    }

    #[test]
    fn test_unknown_enrollment_is_ignored() {
        let mut entries = vec![entry(1, false)];
        assert!(!apply_patch(&mut entries, 9, &MarkPatch::presence(true)));
    }

    #[test]
    fn test_mark_request_body_is_flat() {
        let req = MarkRequest {
            sesiune_id: 7,
            inscriere_id: 3,
            patch: MarkPatch::presence(false),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sesiune_id": 7, "inscriere_id": 3, "is_prezent": false})
        );
    }

    #[test]
    fn test_summary() {
        let entries = vec![entry(1, true), entry(2, true), entry(3, true), entry(4, false)];
        let s = AttendanceSummary::of(&entries);
        assert_eq!((s.present, s.total, s.percentage), (3, 4, 75));
        assert_eq!(AttendanceSummary::of(&[]).percentage, 0);
    }
}
