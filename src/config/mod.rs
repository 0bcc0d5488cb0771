// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置，包括数据库连接配置
pub mod settings;
