//! Foreign-key name resolution over in-memory reference lists.

use crate::components::searchable_select::SelectOption;

/// A backend record that can be referenced by id from another record.
pub trait Record {
    fn id(&self) -> i64;

    /// Human-readable name shown in tables and pickers.
    fn label(&self) -> String;

    /// Heading under which the record is grouped in a picker.
    fn group(&self) -> String {
        String::new()
    }

    /// Id of a related record a form may pre-fill from this one.
    fn linked(&self) -> Option<i64> {
        None
    }
}

/// Linear scan for `id`, returning `fallback` when the id is not loaded.
pub fn resolve_name<T: Record>(items: &[T], id: i64, fallback: &str) -> String {
    items
        .iter()
        .find(|item| item.id() == id)
        .map(Record::label)
        .unwrap_or_else(|| fallback.to_string())
}

/// Like [`resolve_name`] for nullable keys: `none` when unset, `missing` when dangling.
pub fn resolve_optional<T: Record>(items: &[T], id: Option<i64>, none: &str, missing: &str) -> String {
    match id {
        None => none.to_string(),
        Some(id) => resolve_name(items, id, missing),
    }
}

pub fn find<T: Record>(items: &[T], id: i64) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

pub fn to_options<T: Record>(items: &[T]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption {
            value: item.id().to_string(),
            label: item.label(),
            group: item.group(),
            linked: item.linked(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named {
        id: i64,
        name: &'static str,
    }

    impl Record for Named {
        fn id(&self) -> i64 {
            self.id
        }
        fn label(&self) -> String {
            self.name.to_string()
        }
    }

    fn courses() -> Vec<Named> {
        vec![
            Named { id: 1, name: "Robotică" },
            Named { id: 4, name: "Python Junior" },
        ]
    }

    #[test]
    fn test_resolve_found() {
        assert_eq!(resolve_name(&courses(), 4, "Necunoscut"), "Python Junior");
    }

    #[test]
    fn test_resolve_fallback_when_absent() {
        assert_eq!(resolve_name(&courses(), 99, "Necunoscut"), "Necunoscut");
        let empty: Vec<Named> = Vec::new();
        assert_eq!(resolve_name(&empty, 1, "Grupă Ștearsă"), "Grupă Ștearsă");
    }

    #[test]
    fn test_resolve_optional() {
        let list = courses();
        assert_eq!(resolve_optional(&list, None, "Direct", "ID Inexistent"), "Direct");
        assert_eq!(resolve_optional(&list, Some(7), "Direct", "ID Inexistent"), "ID Inexistent");
        assert_eq!(resolve_optional(&list, Some(1), "Direct", "ID Inexistent"), "Robotică");
    }

    #[test]
    fn test_to_options_keeps_order() {
        let opts = to_options(&courses());
        assert_eq!(opts.len(), 2);
        assert_eq!(opts[0].value, "1");
        assert_eq!(opts[1].label, "Python Junior");
        assert!(opts[1].linked.is_none());
    }
}
