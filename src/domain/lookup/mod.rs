// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 查询领域模块
///
/// 定义数据源接口（provider）、HTTP传输接口（transport）、
/// 查询错误类型以及囚犯编号的解析规则（identifier）
pub mod identifier;
pub mod provider;
pub mod transport;

pub use provider::{InmateProvider, LookupError};
pub use transport::{FormTransport, ParamEncoding, PostRequest, TransportError};
