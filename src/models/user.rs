use super::{new_id, Entity, Patch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Attributes required to register a user.
#[derive(Clone, Debug, PartialEq, Deserialize, ToSchema)]
pub struct NewUser {
    /// First name of the user
    #[schema(example = "Ada")]
    pub first_name: String,
    /// Last name of the user
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// Email of the user
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl User {
    pub fn new(data: NewUser) -> Self {
        let now = Utc::now();
        User {
            id: new_id(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial overwrite of a user's attributes; `None` leaves the field alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<NewUser> for UserUpdate {
    fn from(data: NewUser) -> Self {
        UserUpdate {
            first_name: Some(data.first_name),
            last_name: Some(data.last_name),
            email: Some(data.email),
        }
    }
}

impl Patch<User> for UserUpdate {
    fn apply(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}
