//! Domain entities held by the repositories.

mod amenity;
mod place;
mod review;
mod user;

pub use amenity::{Amenity, NewAmenity};
pub use place::{NewPlace, Place};
pub use review::{NewReview, Review};
pub use user::{NewUser, User, UserUpdate};

/// A stored kind with a stable identity.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    /// Bump the modification timestamp after a change has been applied.
    fn touch(&mut self);
}

/// Typed change set applied onto a stored entity. Only the attributes carried by
/// the patch are overwritten.
pub trait Patch<E> {
    fn apply(self, entity: &mut E);
}

/// Opaque identity for new entities.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
