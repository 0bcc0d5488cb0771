// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::post::Post;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 帖子仓库特质
///
/// 定义帖子数据访问接口。列表查询默认按发布时间升序返回。
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// 创建新帖子
    async fn create(&self, post: &Post) -> Result<Post, RepositoryError>;
    /// 根据ID查找帖子
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError>;
    /// 更新帖子正文、群组引用和配图；发布时间和作者不可变
    async fn update(&self, post: &Post) -> Result<Post, RepositoryError>;
    /// 删除帖子，其评论级联删除
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出所有帖子，按发布时间升序
    async fn list(&self) -> Result<Vec<Post>, RepositoryError>;
    /// 列出某作者的所有帖子，按发布时间升序
    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepositoryError>;
    /// 列出某群组的所有帖子，按发布时间升序
    async fn list_by_group(&self, group_id: Uuid) -> Result<Vec<Post>, RepositoryError>;
}
