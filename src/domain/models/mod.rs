// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 用户（user）：由外部认证子系统管理的账户记录
/// - 群组（group）：帖子的可选归属分类
/// - 帖子（post）：用户发布的内容
/// - 评论（comment）：针对帖子的评论
/// - 关注（follow）：用户之间的关注关系
///
/// 这些模型只承载属性和展示格式化，持久化由仓库层负责。
pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;


/// 摘要中长文本字段的最大展示长度（字符数）
///
/// 仅用于日志和显示，不是数据完整性规则
pub const SUMMARY_TEXT_LEN: usize = 15;

/// 按字符截断文本用于摘要展示
pub(crate) fn preview(text: &str) -> String {
    text.chars().take(SUMMARY_TEXT_LEN).collect()
}
