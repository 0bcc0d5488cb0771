// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 用户仓库特质
///
/// 账户由外部认证子系统拥有，这里只定义外键解析和
/// 级联验证所需的最小数据访问接口。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建新用户
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
    /// 根据ID查找用户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    /// 删除用户，其帖子、评论和关注记录级联删除
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
