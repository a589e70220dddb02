//! Entity trait: identity + continuity across state changes.
//!
//! The back-office keeps every collection as a plain `Vec`, so the helpers
//! here implement replace-by-id and remove-by-id once for all of them.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Find an entity by identifier.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}

/// Replace the entity sharing `replacement`'s identifier, keeping its position.
///
/// Returns the previous value, or `None` (collection untouched) when no entity
/// with that identifier exists.
pub fn replace_by_id<E: Entity>(items: &mut [E], replacement: E) -> Option<E> {
    let slot = items.iter_mut().find(|item| item.id() == replacement.id())?;
    Some(core::mem::replace(slot, replacement))
}

/// Remove the entity with identifier `id`, preserving the order of the rest.
pub fn remove_by_id<E: Entity>(items: &mut Vec<E>, id: &E::Id) -> Option<E> {
    let index = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, label: "a" },
            Row { id: 2, label: "b" },
            Row { id: 3, label: "c" },
        ]
    }

    #[test]
    fn replace_keeps_position() {
        let mut items = rows();
        let old = replace_by_id(&mut items, Row { id: 2, label: "z" });
        assert_eq!(old.map(|r| r.label), Some("b"));
        assert_eq!(items[1], Row { id: 2, label: "z" });
    }

    #[test]
    fn replace_unknown_is_noop() {
        let mut items = rows();
        assert!(replace_by_id(&mut items, Row { id: 9, label: "z" }).is_none());
        assert_eq!(items, rows());
    }

    #[test]
    fn remove_preserves_order() {
        let mut items = rows();
        assert!(remove_by_id(&mut items, &1).is_some());
        assert!(remove_by_id(&mut items, &1).is_none());
        let ids: Vec<u32> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(find_by_id(&items, &3).map(|r| r.label), Some("c"));
    }
}
