// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preview;

/// 评论实体
///
/// 针对帖子的评论。作者和帖子引用都必须存在，
/// 删除任一方时级联删除评论。创建时间在创建时分配并建有索引。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// 评论唯一标识符
    pub id: Uuid,
    /// 作者ID（必填）
    pub author_id: Uuid,
    /// 所属帖子ID（必填）
    pub post_id: Uuid,
    /// 评论正文，不限长度
    pub text: String,
    /// 创建时间，创建时自动分配
    pub created: DateTime<FixedOffset>,
}

impl Comment {
    /// 创建新的评论记录
    ///
    /// 标识符和创建时间在构造时自动分配
    pub fn new(text: impl Into<String>, author_id: Uuid, post_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            post_id,
            text: text.into(),
            created: Utc::now().into(),
        }
    }

    /// 生成评论的摘要展示串
    ///
    /// 帖子正文和作者用户名由调用方传入。长文本字段按
    /// [`super::SUMMARY_TEXT_LEN`] 截断。
    pub fn summary(&self, post_text: &str, author_username: &str) -> String {
        format!(
            "post: {}, comment author: {}, text: {}, created: {}.",
            preview(post_text),
            author_username,
            preview(&self.text),
            self.created
        )
    }
}
