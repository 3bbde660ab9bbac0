// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - HTTP（http）：基于reqwest的表单POST传输实现
/// - 数据源（providers）：TDCJ、FBOP 查询客户端以及多辖区聚合查询
///
/// 基础设施层依赖于领域层的抽象接口（`FormTransport`、`InmateProvider`）。
pub mod http;
pub mod providers;
