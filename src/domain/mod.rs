// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：囚犯记录、释放日期和结果表格行
/// - 查询接口（lookup）：数据源和HTTP传输的抽象接口及错误类型
/// - 服务（services）：姓名解析等纯业务规则
///
/// 领域层不依赖于任何具体的网络实现。
pub mod lookup;
pub mod models;
pub mod services;
