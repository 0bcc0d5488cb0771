// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 用户仓库（user_repository）：账户记录的最小读写面
/// - 群组仓库（group_repository）：群组的增删改查
/// - 帖子仓库（post_repository）：帖子的增删改查和默认排序查询
/// - 评论仓库（comment_repository）：评论的增删改查和默认排序查询
/// - 关注仓库（follow_repository）：关注关系的建立与解除
pub mod comment_repository;
pub mod follow_repository;
pub mod group_repository;
pub mod post_repository;
pub mod user_repository;

/// 仓库错误类型
///
/// 本层不做重试或恢复：数据存储抛出的约束冲突原样向上传播，
/// 只按冲突类别区分（唯一约束、外键约束、其他数据库错误），
/// 不翻译为领域特定错误。
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 唯一约束冲突（slug、用户名或关注组合已存在）
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
    /// 外键约束冲突（引用的父记录不存在）
    #[error("Foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),
    /// 其他数据库错误（包括检查约束冲突）
    #[error("Database error: {0}")]
    Database(DbErr),
    /// 记录未找到（查找、更新或删除的目标行不存在）
    #[error("Record not found")]
    NotFound,
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        // Updating a missing row reports NotFound, same as delete
        if matches!(err, DbErr::RecordNotUpdated) {
            return Self::NotFound;
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::UniqueViolation(message),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Self::ForeignKeyViolation(message)
            }
            _ => Self::Database(err),
        }
    }
}
