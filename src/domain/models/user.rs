// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用户账户实体
///
/// 账户的生命周期由外部认证子系统管理，本层只保存
/// 外键解析所需的最小属性集。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识符
    pub id: Uuid,
    /// 用户名，全局唯一
    pub username: String,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl User {
    /// 创建新的用户记录
    ///
    /// 标识符和创建时间在构造时自动分配
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            created_at: Utc::now().into(),
        }
    }
}
