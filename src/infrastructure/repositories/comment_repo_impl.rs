// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::Comment;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::comment as comment_entity;
use async_trait::async_trait;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 评论仓库实现
///
/// 基于SeaORM实现的评论数据访问层
#[derive(Clone)]
pub struct CommentRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryImpl {
    /// 创建新的评论仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<comment_entity::Model> for Comment {
    fn from(model: comment_entity::Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            post_id: model.post_id,
            text: model.text,
            created: model.created,
        }
    }
}

impl From<Comment> for comment_entity::ActiveModel {
    fn from(comment: Comment) -> Self {
        Self {
            id: Set(comment.id),
            author_id: Set(comment.author_id),
            post_id: Set(comment.post_id),
            text: Set(comment.text),
            created: Set(comment.created),
        }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError> {
        let model: comment_entity::ActiveModel = comment.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(comment.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError> {
        let model = comment_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, comment: &Comment) -> Result<Comment, RepositoryError> {
        // created, author_id and post_id are immutable after creation
        let model = comment_entity::ActiveModel {
            id: Unchanged(comment.id),
            text: Set(comment.text.clone()),
            ..Default::default()
        };

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = comment_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepositoryError> {
        let models = comment_entity::Entity::find()
            .filter(comment_entity::Column::PostId.eq(post_id))
            .order_by_desc(comment_entity::Column::Created)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
