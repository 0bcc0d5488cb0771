// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::post::Post;
use crate::domain::repositories::post_repository::PostRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::post as post_entity;
use async_trait::async_trait;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 帖子仓库实现
///
/// 基于SeaORM实现的帖子数据访问层
#[derive(Clone)]
pub struct PostRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryImpl {
    /// 创建新的帖子仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<post_entity::Model> for Post {
    fn from(model: post_entity::Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            pub_date: model.pub_date,
            author_id: model.author_id,
            group_id: model.group_id,
            image: model.image,
        }
    }
}

impl From<Post> for post_entity::ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id),
            text: Set(post.text),
            pub_date: Set(post.pub_date),
            author_id: Set(post.author_id),
            group_id: Set(post.group_id),
            image: Set(post.image),
        }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryImpl {
    async fn create(&self, post: &Post) -> Result<Post, RepositoryError> {
        let model: post_entity::ActiveModel = post.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(post.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
        let model = post_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, post: &Post) -> Result<Post, RepositoryError> {
        // pub_date and author_id are assigned at creation and never written again
        let model = post_entity::ActiveModel {
            id: Unchanged(post.id),
            text: Set(post.text.clone()),
            group_id: Set(post.group_id),
            image: Set(post.image.clone()),
            ..Default::default()
        };

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = post_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!("Deleted post {} with its comments", id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        let models = post_entity::Entity::find()
            .order_by_asc(post_entity::Column::PubDate)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepositoryError> {
        let models = post_entity::Entity::find()
            .filter(post_entity::Column::AuthorId.eq(author_id))
            .order_by_asc(post_entity::Column::PubDate)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_group(&self, group_id: Uuid) -> Result<Vec<Post>, RepositoryError> {
        let models = post_entity::Entity::find()
            .filter(post_entity::Column::GroupId.eq(group_id))
            .order_by_asc(post_entity::Column::PubDate)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
