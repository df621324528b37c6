use super::{new_id, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Review {
    pub id: String,
    pub text: String,
    pub rating: u8,
    pub place_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewReview {
    pub text: String,
    pub rating: u8,
    pub place_id: String,
    pub user_id: String,
}

impl Review {
    pub fn new(data: NewReview) -> Self {
        let now = Utc::now();
        Review {
            id: new_id(),
            text: data.text,
            rating: data.rating,
            place_id: data.place_id,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Review {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
