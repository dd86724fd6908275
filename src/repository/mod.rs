use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::domain::{NewUser, User};
use crate::entity::{UserEntity, user};

/// Persistence gateway for users.
///
/// Each method issues a single statement against the store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, DbErr>;
    async fn find_by_id(&self, id: u32) -> Result<Option<User>, DbErr>;
    async fn insert(&self, user: NewUser) -> Result<User, DbErr>;
    /// Overwrite every column of an existing row.
    ///
    /// Returns `DbErr::RecordNotUpdated` when no row has that id.
    async fn save(&self, user: &User) -> Result<(), DbErr>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: u32) -> Result<u64, DbErr>;
}

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Ids beyond the column range can never have been assigned.
fn column_id(id: u32) -> Option<i32> {
    i32::try_from(id).ok()
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        UserEntity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(User::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<User>, DbErr> {
        let Some(key) = column_id(id) else {
            return Ok(None);
        };
        UserEntity::find_by_id(key)
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn insert(&self, user: NewUser) -> Result<User, DbErr> {
        let row = user::ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            age: Set(i64::from(user.age)),
        }
        .insert(&self.db)
        .await?;
        User::try_from(row)
    }

    async fn save(&self, user: &User) -> Result<(), DbErr> {
        let key = column_id(user.id).ok_or(DbErr::RecordNotUpdated)?;
        user::ActiveModel {
            id: Unchanged(key),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            age: Set(i64::from(user.age)),
        }
        .update(&self.db)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> Result<u64, DbErr> {
        let Some(key) = column_id(id) else {
            return Ok(0);
        };
        let result = UserEntity::delete_by_id(key).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
