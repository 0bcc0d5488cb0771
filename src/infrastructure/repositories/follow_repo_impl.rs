// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::follow::Follow;
use crate::domain::repositories::follow_repository::FollowRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::follow as follow_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 关注仓库实现
///
/// 基于SeaORM实现的关注关系数据访问层。
/// 唯一性和自我关注禁止由数据库约束强制，这里只负责透传冲突。
#[derive(Clone)]
pub struct FollowRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl FollowRepositoryImpl {
    /// 创建新的关注仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<follow_entity::Model> for Follow {
    fn from(model: follow_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            following_id: model.following_id,
        }
    }
}

impl From<Follow> for follow_entity::ActiveModel {
    fn from(follow: Follow) -> Self {
        Self {
            id: Set(follow.id),
            user_id: Set(follow.user_id),
            following_id: Set(follow.following_id),
        }
    }
}

#[async_trait]
impl FollowRepository for FollowRepositoryImpl {
    async fn create(&self, follow: &Follow) -> Result<Follow, RepositoryError> {
        let model: follow_entity::ActiveModel = follow.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(follow.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Follow>, RepositoryError> {
        let model = follow_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = follow_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn unfollow(&self, user_id: Uuid, following_id: Uuid) -> Result<(), RepositoryError> {
        let result = follow_entity::Entity::delete_many()
            .filter(follow_entity::Column::UserId.eq(user_id))
            .filter(follow_entity::Column::FollowingId.eq(following_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!("User {} unfollowed {}", user_id, following_id);
        Ok(())
    }

    async fn exists(&self, user_id: Uuid, following_id: Uuid) -> Result<bool, RepositoryError> {
        let count = follow_entity::Entity::find()
            .filter(follow_entity::Column::UserId.eq(user_id))
            .filter(follow_entity::Column::FollowingId.eq(following_id))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn list_followers(&self, user_id: Uuid) -> Result<Vec<Follow>, RepositoryError> {
        let models = follow_entity::Entity::find()
            .filter(follow_entity::Column::FollowingId.eq(user_id))
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_following(&self, user_id: Uuid) -> Result<Vec<Follow>, RepositoryError> {
        let models = follow_entity::Entity::find()
            .filter(follow_entity::Column::UserId.eq(user_id))
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
