//! Records listed by the dashboard screens, addressed by their sequence id.

/// A listed record (invoice, client, transaction) with a stable identifier.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// First record in list order carrying `id`.
pub fn find_by_id<'a, E: Entity>(entities: &'a [E], id: &E::Id) -> Option<&'a E> {
    entities.iter().find(|e| e.id() == id)
}
