// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据源模块
///
/// - TDCJ（tdcj）：德州刑事司法部罪犯查询表单，解析HTML结果表格
/// - FBOP（fbop）：联邦监狱局囚犯定位接口，解析JSON结果
/// - 聚合（aggregator）：按辖区依次调用各数据源并收集网络错误
pub mod aggregator;
pub mod fbop;
pub mod tdcj;

pub use aggregator::{Lookup, LookupReport};
pub use fbop::FbopClient;
pub use tdcj::SearchClient;
