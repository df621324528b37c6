use super::{new_id, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewAmenity {
    pub name: String,
}

impl Amenity {
    pub fn new(data: NewAmenity) -> Self {
        let now = Utc::now();
        Amenity {
            id: new_id(),
            name: data.name,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Amenity {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
