// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::follow::Follow;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 关注仓库特质
///
/// 定义关注关系数据访问接口。组合唯一性和自我关注禁止
/// 都由数据存储层的约束强制，违规以约束冲突形式返回。
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// 建立关注关系
    async fn create(&self, follow: &Follow) -> Result<Follow, RepositoryError>;
    /// 根据ID查找关注记录
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Follow>, RepositoryError>;
    /// 删除关注记录
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 按（关注者，被关注者）组合解除关注
    async fn unfollow(&self, user_id: Uuid, following_id: Uuid) -> Result<(), RepositoryError>;
    /// 检查关注关系是否存在
    async fn exists(&self, user_id: Uuid, following_id: Uuid) -> Result<bool, RepositoryError>;
    /// 列出关注某用户的所有记录（粉丝）
    async fn list_followers(&self, user_id: Uuid) -> Result<Vec<Follow>, RepositoryError>;
    /// 列出某用户关注的所有记录
    async fn list_following(&self, user_id: Uuid) -> Result<Vec<Follow>, RepositoryError>;
}
