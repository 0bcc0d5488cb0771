// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::group::Group;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 群组仓库特质
///
/// 定义群组数据访问接口。slug 的唯一性由数据存储层强制。
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// 创建新群组
    async fn create(&self, group: &Group) -> Result<Group, RepositoryError>;
    /// 根据ID查找群组
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, RepositoryError>;
    /// 根据slug查找群组
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepositoryError>;
    /// 更新群组
    async fn update(&self, group: &Group) -> Result<Group, RepositoryError>;
    /// 删除群组，引用它的帖子的群组引用被置空
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出所有群组
    async fn list(&self) -> Result<Vec<Group>, RepositoryError>;
}
