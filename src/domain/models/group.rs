// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 群组实体
///
/// 帖子的可选归属分类。slug 是对外稳定标识符，全局唯一。
/// 删除群组时，引用它的帖子的群组引用被置空（帖子保留）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// 群组唯一标识符
    pub id: Uuid,
    /// 群组标题，最长200字符
    pub title: String,
    /// URL安全的唯一标识串，最长100字符
    pub slug: String,
    /// 群组描述，不限长度
    pub description: String,
}

impl Group {
    /// 创建新的群组记录
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
        }
    }
}

/// 群组的摘要展示即其标题
impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
