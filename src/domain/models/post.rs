// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preview;

/// 帖子实体
///
/// 用户发布的内容。作者引用必须存在（删除作者时级联删除帖子），
/// 群组引用可选（删除群组时置空）。发布时间在创建时分配，此后不可变。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// 帖子唯一标识符
    pub id: Uuid,
    /// 帖子正文，不限长度
    pub text: String,
    /// 发布时间，创建时自动分配
    pub pub_date: DateTime<FixedOffset>,
    /// 作者ID（必填）
    pub author_id: Uuid,
    /// 群组ID（可选）
    pub group_id: Option<Uuid>,
    /// 配图的存储路径（可选），位于 posts/ 命名空间下
    pub image: Option<String>,
}

impl Post {
    /// 创建新的帖子记录
    ///
    /// 标识符和发布时间在构造时自动分配
    pub fn new(text: impl Into<String>, author_id: Uuid, group_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            pub_date: Utc::now().into(),
            author_id,
            group_id,
            image: None,
        }
    }

    /// 生成帖子的摘要展示串
    ///
    /// 作者用户名和群组标题保存在其他记录上，由调用方查出后传入，
    /// 格式化本身不触碰持久化。正文按 [`super::SUMMARY_TEXT_LEN`] 截断。
    pub fn summary(&self, author_username: &str, group_title: Option<&str>) -> String {
        format!(
            "published: {}, author: {}, group: {}, post: {}.",
            self.pub_date,
            author_username,
            group_title.unwrap_or("none"),
            preview(&self.text)
        )
    }
}
