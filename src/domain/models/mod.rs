// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 囚犯记录（inmate）：每个查询结果行规范化后的输出
/// - 原始行（raw_row）：从结果表格中提取的、以表头为键的单元格
pub mod inmate;
pub mod raw_row;

pub use inmate::{InmateRecord, Jurisdiction, ReleaseDate};
pub use raw_row::RawRow;
