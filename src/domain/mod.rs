use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::entity::user;

/// A persisted user, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// A user that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Validated update input. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }

    /// Merge into `user` in memory. Nothing is written here.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }
}

/// Raw `POST /users` fields. Everything arrives as text and is parsed by pipes.
#[derive(Debug, Default)]
pub struct CreateUserForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
}

/// Raw `PUT /users/{id}` fields.
#[derive(Debug, Default)]
pub struct UpdateUserForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
}

impl TryFrom<user::Model> for User {
    type Error = DbErr;

    fn try_from(model: user::Model) -> Result<Self, Self::Error> {
        let id = u32::try_from(model.id)
            .map_err(|_| DbErr::Custom(format!("users.id {} is not a valid id", model.id)))?;
        let age = u32::try_from(model.age).map_err(|_| {
            DbErr::Custom(format!("users.age {} out of range for user {}", model.age, id))
        })?;
        Ok(Self {
            id,
            name: model.name,
            email: model.email,
            age,
        })
    }
}
