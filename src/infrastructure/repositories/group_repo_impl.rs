// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::group::Group;
use crate::domain::repositories::group_repository::GroupRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::group as group_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 群组仓库实现
///
/// 基于SeaORM实现的群组数据访问层
#[derive(Clone)]
pub struct GroupRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl GroupRepositoryImpl {
    /// 创建新的群组仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<group_entity::Model> for Group {
    fn from(model: group_entity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
        }
    }
}

impl From<Group> for group_entity::ActiveModel {
    fn from(group: Group) -> Self {
        Self {
            id: Set(group.id),
            title: Set(group.title),
            slug: Set(group.slug),
            description: Set(group.description),
        }
    }
}

#[async_trait]
impl GroupRepository for GroupRepositoryImpl {
    async fn create(&self, group: &Group) -> Result<Group, RepositoryError> {
        let model: group_entity::ActiveModel = group.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(group.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, RepositoryError> {
        let model = group_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepositoryError> {
        let model = group_entity::Entity::find()
            .filter(group_entity::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, group: &Group) -> Result<Group, RepositoryError> {
        let model: group_entity::ActiveModel = group.clone().into();

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = group_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!("Deleted group {}, referencing posts keep no group", id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Group>, RepositoryError> {
        let models = group_entity::Entity::find()
            .order_by_asc(group_entity::Column::Title)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
