// src/main.rs
use clap::{Parser, Subcommand, ValueEnum};

use prospect_console::dashboard::Dashboard;
use prospect_console::present::financials::{FinancialView, StatementTab};
use prospect_console::present::report_text::ReportBlock;
use prospect_console::present::status::{banners_for, BannerLevel};
use prospect_console::state::{Completion, LaneStatus};
use prospect_console::storage::ReportStore;
use prospect_console::transform::DisplayRecord;
use prospect_console::utils::{self, AppError};
use prospect_console::{ClientConfig, HttpApiClient, SearchKind};

/// Command line front end for the business intelligence dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend base URL (falls back to PROSPECT_API_URL, then http://localhost:5000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search companies or individuals
    Search {
        /// Search text, sent as typed
        query: String,

        /// What to search for
        #[arg(short, long, value_enum, default_value = "company")]
        kind: KindArg,
    },
    /// Search a company and show financial statements for one result row
    Financials {
        query: String,

        /// Result row to expand
        #[arg(short, long, default_value = "0")]
        row: usize,

        /// Statement tab to show
        #[arg(short, long, value_enum, default_value = "income")]
        tab: TabArg,
    },
    /// Generate an AI report on a person
    Report {
        #[arg(short, long)]
        person: String,

        #[arg(short, long, default_value = "")]
        company: String,

        /// Also save the report as JSON and markdown in this directory
        #[arg(short, long)]
        output_dir: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Company,
    Person,
}

impl From<KindArg> for SearchKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Company => SearchKind::Company,
            KindArg::Person => SearchKind::Person,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TabArg {
    Income,
    Balance,
    Cashflow,
    Equity,
}

impl From<TabArg> for StatementTab {
    fn from(t: TabArg) -> Self {
        match t {
            TabArg::Income => StatementTab::Income,
            TabArg::Balance => StatementTab::Balance,
            TabArg::Cashflow => StatementTab::CashFlow,
            TabArg::Equity => StatementTab::Equity,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Build the API client and dashboard
    let config = ClientConfig::resolve(args.api_url.as_deref());
    tracing::info!("Using backend at {}", config.base_url);
    let dashboard = Dashboard::new(HttpApiClient::new(config)?);

    match args.command {
        Command::Search { query, kind } => run_search(&dashboard, kind.into(), query).await,
        Command::Financials { query, row, tab } => run_financials(&dashboard, query, row, tab.into()).await,
        Command::Report { person, company, output_dir } => {
            run_report(&dashboard, &person, &company, output_dir.as_deref()).await
        }
    }
}

async fn search_lane(dashboard: &Dashboard<HttpApiClient>, kind: SearchKind, query: String) -> Result<Vec<DisplayRecord>, AppError> {
    dashboard.set_query(kind, query).await;
    if dashboard.submit_search(kind).await? == Completion::Stale {
        return Err(AppError::Config("Search was superseded".to_string()));
    }

    let state = dashboard.snapshot().await;
    let lane = state.lane(kind);
    if lane.status() == LaneStatus::Failure {
        return Err(AppError::Config(lane.error().unwrap_or("Search failed").to_string()));
    }
    if let Some(mapped) = lane.mapped_query() {
        println!("Showing results for {}", mapped);
    }
    if let Some(message) = lane.message() {
        println!("{}", message);
    }
    Ok(lane.results().to_vec())
}

async fn run_search(dashboard: &Dashboard<HttpApiClient>, kind: SearchKind, query: String) -> Result<(), AppError> {
    let records = search_lane(dashboard, kind, query).await?;
    if records.is_empty() {
        println!("No results found.");
    }
    for (i, record) in records.iter().enumerate() {
        print_record(i, record);
    }
    Ok(())
}

async fn run_financials(
    dashboard: &Dashboard<HttpApiClient>,
    query: String,
    row: usize,
    tab: StatementTab,
) -> Result<(), AppError> {
    let records = search_lane(dashboard, SearchKind::Company, query).await?;
    dashboard.toggle_row(row).await;
    let record = records
        .get(row)
        .ok_or_else(|| AppError::Config(format!("No company result at row {} ({} results)", row, records.len())))?;
    print_record(row, record);

    if dashboard.open_financials(row).await.is_none() {
        return Err(AppError::Config(format!("No company result at row {}", row)));
    }
    dashboard.select_tab(tab).await;

    let state = dashboard.snapshot().await;
    let Some(modal) = state.financials.as_ref() else {
        return Ok(());
    };
    match &modal.view {
        FinancialView::NoData => println!("\nNo financial statement data available for {}.", modal.company),
        FinancialView::Statements { .. } => {
            if let Some(table) = modal.view.active_table() {
                println!("\n{} - {} (period ending {})", modal.company, table.tab, table.period);
                for r in &table.rows {
                    println!("  {:<40} {:>16}", r.label, r.value);
                }
            }
        }
    }
    Ok(())
}

async fn run_report(
    dashboard: &Dashboard<HttpApiClient>,
    person: &str,
    company: &str,
    output_dir: Option<&str>,
) -> Result<(), AppError> {
    dashboard.request_report(person, company).await?;

    let state = dashboard.snapshot().await;
    if let Some(error) = state.report.error() {
        return Err(AppError::Config(error.to_string()));
    }
    let Some(report) = state.report.report() else {
        return Ok(());
    };

    for block in state.report.blocks() {
        match block {
            ReportBlock::Bullet(text) => println!("  {}", text),
            ReportBlock::Paragraph(text) => println!("\n{}", text),
        }
    }
    if !report.data_sources.is_empty() {
        println!("\nSources: {}", report.data_sources.join(", "));
    }

    if let Some(dir) = output_dir {
        let store = ReportStore::new(dir)?;
        let saved = store.save_report(person, company, report)?;
        println!("\nSaved {} and {}", saved.json_path.display(), saved.markdown_path.display());
    }

    dashboard.close_report().await;
    Ok(())
}

fn print_record(index: usize, record: &DisplayRecord) {
    println!("[{}] {} - {}", index, record.name, record.title);
    if record.is_company() {
        if let Some(ticker) = &record.ticker {
            println!("    Ticker: {}", ticker);
        }
        println!("    CEO: {}", record.ceo_name.as_deref().unwrap_or("Unknown"));
        println!(
            "    Industry: {} | Revenue: {} | Employees: {}",
            record.company_info.industry, record.company_info.revenue, record.company_info.employees
        );
        for banner in banners_for(record) {
            let tag = match banner.level {
                BannerLevel::Error => "ERROR",
                BannerLevel::Warning => "WARNING",
            };
            println!("    {} [{}]: {}", tag, banner.source, banner.message);
        }
        for news in record.recent_news.iter().take(3) {
            println!("    News: {} ({}, {})", news.title, news.source, news.date);
        }
    } else {
        println!("    Company: {} | Net worth: {}", record.company, record.estimated_net_worth);
    }
    if record.linkedin_url != "#" {
        println!("    LinkedIn: {}", record.linkedin_url);
    }
    if !record.data_sources.is_empty() {
        println!("    Sources: {}", record.data_sources.join(", "));
    }
}
