//! Shared traits implemented by ledger entities.

use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Associates entities with the category they are booked against.
pub trait BelongsToCategory {
    fn category_id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Whether any item is booked against `category_id`.
pub fn references<T: BelongsToCategory>(items: &[T], category_id: Uuid) -> bool {
    items.iter().any(|item| item.category_id() == category_id)
}

pub(crate) fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

pub(crate) fn find_by_id_mut<T: Identifiable>(items: &mut [T], id: Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}
