//! Single coordination point over the per-kind repositories.

use crate::error::AppError;
use crate::models::{
    Amenity, NewAmenity, NewPlace, NewReview, NewUser, Place, Review, User, UserUpdate,
};
use crate::repository::InMemoryRepository;

fn email_of(user: &User) -> &str {
    &user.email
}

/// Owns one repository per entity kind and enforces the rules a generic
/// repository cannot express (email uniqueness). Constructed once at startup
/// and shared through the application state.
#[derive(Default)]
pub struct HbnbFacade {
    user_repo: InMemoryRepository<User>,
    place_repo: InMemoryRepository<Place>,
    review_repo: InMemoryRepository<Review>,
    amenity_repo: InMemoryRepository<Amenity>,
}

impl HbnbFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a user and store it. No uniqueness check; see [`register_user`](Self::register_user).
    pub fn create_user(&self, data: NewUser) -> User {
        let user = User::new(data);
        self.user_repo.add(user.clone());
        tracing::info!(user_id = %user.id, "user created");
        user
    }

    /// Create a user unless the email is already registered. The email check and
    /// the insert are one atomic step.
    pub fn register_user(&self, data: NewUser) -> Result<User, AppError> {
        let user = User::new(data);
        self.user_repo
            .add_unique(user.clone(), email_of)
            .map_err(|conflict| {
                tracing::warn!(existing_id = %conflict.existing_id, "email already registered");
                AppError::DuplicateEmail
            })?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub fn get_user(&self, user_id: &str) -> Option<User> {
        self.user_repo.get(user_id)
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.user_repo.get_all()
    }

    /// Apply `changes` and return the user as it is after the update.
    /// `Ok(None)` when the user does not exist; nothing is written in that case.
    pub fn update_user(&self, user_id: &str, changes: UserUpdate) -> Result<Option<User>, AppError> {
        let updated = self
            .user_repo
            .update_unique(user_id, changes, email_of)
            .map_err(|conflict| {
                tracing::warn!(user_id = %user_id, existing_id = %conflict.existing_id, "email already registered");
                AppError::DuplicateEmail
            })?;
        if updated.is_some() {
            tracing::info!(user_id = %user_id, "user updated");
        }
        Ok(updated)
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.user_repo.get_by_attribute(email_of, email)
    }

    pub fn delete_user(&self, user_id: &str) -> Option<User> {
        let removed = self.user_repo.delete(user_id);
        if removed.is_some() {
            tracing::info!(user_id = %user_id, "user deleted");
        }
        removed
    }

    pub fn create_place(&self, data: NewPlace) -> Place {
        let place = Place::new(data);
        self.place_repo.add(place.clone());
        tracing::info!(place_id = %place.id, "place created");
        place
    }

    pub fn get_place(&self, place_id: &str) -> Option<Place> {
        self.place_repo.get(place_id)
    }

    pub fn get_all_places(&self) -> Vec<Place> {
        self.place_repo.get_all()
    }

    pub fn create_review(&self, data: NewReview) -> Review {
        let review = Review::new(data);
        self.review_repo.add(review.clone());
        tracing::info!(review_id = %review.id, "review created");
        review
    }

    pub fn get_review(&self, review_id: &str) -> Option<Review> {
        self.review_repo.get(review_id)
    }

    pub fn get_all_reviews(&self) -> Vec<Review> {
        self.review_repo.get_all()
    }

    pub fn create_amenity(&self, data: NewAmenity) -> Amenity {
        let amenity = Amenity::new(data);
        self.amenity_repo.add(amenity.clone());
        tracing::info!(amenity_id = %amenity.id, "amenity created");
        amenity
    }

    pub fn get_amenity(&self, amenity_id: &str) -> Option<Amenity> {
        self.amenity_repo.get(amenity_id)
    }

    pub fn get_all_amenities(&self) -> Vec<Amenity> {
        self.amenity_repo.get_all()
    }
}
