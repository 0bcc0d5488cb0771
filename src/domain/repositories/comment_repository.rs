// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::Comment;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 评论仓库特质
///
/// 定义评论数据访问接口。列表查询默认按创建时间降序返回（最新在前）。
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 创建新评论
    async fn create(&self, comment: &Comment) -> Result<Comment, RepositoryError>;
    /// 根据ID查找评论
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError>;
    /// 更新评论正文；创建时间、作者和帖子引用不可变
    async fn update(&self, comment: &Comment) -> Result<Comment, RepositoryError>;
    /// 删除评论
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出某帖子下的所有评论，按创建时间降序
    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepositoryError>;
}
