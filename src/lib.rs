// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含囚犯记录模型、查询接口和姓名解析等核心逻辑
pub mod domain;

/// 基础设施模块
///
/// 提供HTTP传输以及TDCJ、FBOP等数据源的具体实现
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
