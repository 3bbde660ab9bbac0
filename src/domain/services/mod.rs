// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 姓名解析（name_parser）：将自由文本全名拆分为称谓、名、中间名、姓和后缀
pub mod name_parser;

pub use name_parser::HumanName;
