// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 关注关系实体
///
/// user 关注 following。数据库层面强制两条约束：
/// (user_id, following_id) 组合唯一，且 user_id 不等于 following_id
/// （不允许自我关注）。删除任一方用户时级联删除该记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    /// 关注记录唯一标识符
    pub id: Uuid,
    /// 关注者的用户ID
    pub user_id: Uuid,
    /// 被关注者的用户ID
    pub following_id: Uuid,
}

impl Follow {
    /// 创建新的关注记录
    pub fn new(user_id: Uuid, following_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            following_id,
        }
    }
}
