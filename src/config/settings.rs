// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::inmate::Jurisdiction;
use crate::infrastructure::providers::{fbop, tdcj};

/// 应用程序配置设置
///
/// 包含各数据源地址、HTTP客户端参数和默认查询辖区
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// TDCJ 罪犯查询配置
    pub tdcj: TdcjSettings,
    /// FBOP 囚犯定位配置
    pub fbop: FbopSettings,
    /// HTTP 客户端配置
    pub http: HttpSettings,
    /// 查询配置
    pub lookup: LookupSettings,
}

/// TDCJ 配置设置
#[derive(Debug, Deserialize)]
pub struct TdcjSettings {
    /// 站点根地址，搜索路径和详情链接都拼接在它后面
    pub base_url: String,
}

/// FBOP 配置设置
#[derive(Debug, Deserialize)]
pub struct FbopSettings {
    /// 囚犯定位接口地址
    pub url: String,
}

/// HTTP 客户端配置设置
#[derive(Debug, Deserialize)]
pub struct HttpSettings {
    /// 单次请求超时时间（秒），不设置则不限制
    pub timeout_secs: Option<u64>,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

/// 查询配置设置
#[derive(Debug, Deserialize)]
pub struct LookupSettings {
    /// 未指定辖区时按编号查询的默认辖区
    pub jurisdictions: Vec<Jurisdiction>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `INMATES__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::default_builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("INMATES")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("lookup.jurisdictions")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Builder preloaded with every default, before any file or environment source.
    pub fn default_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("tdcj.base_url", tdcj::DEFAULT_BASE_URL)?
            .set_default("fbop.url", fbop::DEFAULT_URL)?
            .set_default("http.user_agent", concat!("inmates/", env!("CARGO_PKG_VERSION")))?
            .set_default("lookup.jurisdictions", vec!["Texas", "Federal"])
    }
}
