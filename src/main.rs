// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use inmates::config::settings::Settings;
use inmates::domain::lookup::provider::InmateProvider;
use inmates::domain::lookup::transport::FormTransport;
use inmates::domain::models::inmate::Jurisdiction;
use inmates::infrastructure::http::ReqwestTransport;
use inmates::infrastructure::providers::{FbopClient, Lookup, LookupReport, SearchClient};
use inmates::utils::telemetry::{self, LogFormat};
use tracing::{info, info_span, warn};

#[derive(Parser)]
#[command(
    name = "inmates",
    about = "Look up inmates in the Texas and Federal corrections systems",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every jurisdiction by name fragments.
    Name {
        first: String,
        last: String,
    },

    /// Look up an inmate number.
    Id {
        id: String,

        /// Jurisdiction to search; repeat for several. Defaults to the configured list.
        #[arg(short, long = "jurisdiction")]
        jurisdictions: Vec<Jurisdiction>,
    },

    /// Print the canonical form of an inmate number.
    Format {
        id: String,

        #[arg(short, long, default_value = "Texas")]
        jurisdiction: Jurisdiction,
    },
}

fn print_report(report: &LookupReport) -> anyhow::Result<()> {
    for error in &report.errors {
        warn!("{}", error);
    }
    println!("{}", serde_json::to_string_pretty(&report.inmates)?);
    Ok(())
}

/// 主函数
///
/// 初始化日志与配置，构建各数据源客户端并执行一次查询
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(LogFormat::from_env());

    let settings = Settings::new()?;
    info!("Configuration loaded");

    let transport: Arc<dyn FormTransport> =
        Arc::new(ReqwestTransport::from_settings(&settings.http));
    let tdcj = SearchClient::new(transport.clone(), settings.tdcj.base_url.clone())
        .with_span(info_span!("provider", name = "TDCJ"));
    let fbop = FbopClient::new(transport, settings.fbop.url.clone())
        .with_span(info_span!("provider", name = "FBOP"));
    let providers: Vec<Arc<dyn InmateProvider>> = vec![Arc::new(tdcj), Arc::new(fbop)];
    let lookup = Lookup::new(providers);

    match cli.command {
        Commands::Name { first, last } => {
            let report = lookup.query_by_name(&first, &last).await?;
            print_report(&report)?;
        }
        Commands::Id { id, jurisdictions } => {
            let jurisdictions = if jurisdictions.is_empty() {
                settings.lookup.jurisdictions
            } else {
                jurisdictions
            };
            let report = lookup.query_by_identifier(&id, &jurisdictions).await?;
            print_report(&report)?;
        }
        Commands::Format { id, jurisdiction } => {
            println!("{}", lookup.provider(jurisdiction)?.format_identifier(&id)?);
        }
    }

    Ok(())
}
