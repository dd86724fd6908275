//! The decisions behind every user endpoint.
//!
//! Each operation follows the same sequence: parse the raw input, validate
//! it, issue at most one mutating repository call, and hand the result back
//! to the transport. Both routers call into this type; neither holds any
//! logic of its own.

use sea_orm::DbErr;
use std::sync::Arc;

use crate::domain::{CreateUserForm, NewUser, UpdateUserForm, User, UserChanges};
use crate::error::{ApiError, Result};
use crate::pipe::Pipe;
use crate::pipe::builtins::{NonEmptyPipe, ParseU32Pipe};
use crate::repository::UserRepository;

const ID: ParseU32Pipe = ParseU32Pipe::new("id");
const AGE: ParseU32Pipe = ParseU32Pipe::new("age");

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = self.repository.find_all().await?;
        tracing::debug!("Fetched {} users", users.len());
        Ok(users)
    }

    pub async fn get(&self, raw_id: String) -> Result<User> {
        let id = ID.transform(raw_id).await?;
        self.find_existing(id).await
    }

    pub async fn create(&self, form: CreateUserForm) -> Result<User> {
        let age = AGE.transform(form.age.unwrap_or_default()).await?;
        let user = self
            .repository
            .insert(NewUser {
                name: form.name.unwrap_or_default(),
                email: form.email.unwrap_or_default(),
                age,
            })
            .await?;
        tracing::info!("Created user {}", user.id);
        Ok(user)
    }

    /// Partial update. Supplied fields are validated before anything is
    /// merged, and the merged record is written with a single save.
    pub async fn update(&self, raw_id: String, form: UpdateUserForm) -> Result<User> {
        let id = ID.transform(raw_id).await?;
        let mut user = self.find_existing(id).await?;

        let changes = self.validate_changes(form).await?;
        if changes.is_empty() {
            tracing::debug!("Update for user {} supplied no fields", id);
        }
        changes.apply_to(&mut user);

        self.repository.save(&user).await.map_err(|err| match err {
            // Deleted between the lookup and the write.
            DbErr::RecordNotUpdated => ApiError::NotFound { id },
            other => ApiError::Persistence(other),
        })?;
        tracing::info!("Updated user {}", id);
        Ok(user)
    }

    pub async fn delete(&self, raw_id: String) -> Result<()> {
        let id = ID.transform(raw_id).await?;
        self.find_existing(id).await?;

        if self.repository.delete(id).await? == 0 {
            return Err(ApiError::NotFound { id });
        }
        tracing::info!("Deleted user {}", id);
        Ok(())
    }

    async fn find_existing(&self, id: u32) -> Result<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound { id })
    }

    async fn validate_changes(&self, form: UpdateUserForm) -> Result<UserChanges> {
        let age = match NonEmptyPipe.transform(form.age).await? {
            Some(raw) => Some(AGE.transform(raw).await?),
            None => None,
        };
        Ok(UserChanges {
            name: NonEmptyPipe.transform(form.name).await?,
            email: NonEmptyPipe.transform(form.email).await?,
            age,
        })
    }
}
