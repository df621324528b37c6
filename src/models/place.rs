use super::{new_id, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Place {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Id of the owning user. Not checked against the user repository.
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewPlace {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
}

impl Place {
    pub fn new(data: NewPlace) -> Self {
        let now = Utc::now();
        Place {
            id: new_id(),
            title: data.title,
            description: data.description,
            price: data.price,
            latitude: data.latitude,
            longitude: data.longitude,
            owner_id: data.owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Place {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
