// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP传输模块
///
/// 提供 `FormTransport` 的 reqwest 实现
pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

#[cfg(test)]
pub(crate) mod stub_transport;
