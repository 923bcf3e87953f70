/// CLI Interface Module
///
/// Non-interactive command line for a single checking run.
///
/// ## Responsibilities
/// - Parse command-line arguments
/// - Initialize logging
/// - Load the ticket file and the drawing into a `CheckerService`
/// - Run the check and print the report

pub mod render;

use crate::application::dto::CheckReportDto;
use crate::application::services::CheckerService;
use crate::domain::validation::ValidationConfig;
use crate::infrastructure::loader::read_ticket_file;
use crate::shared::error::CheckerError;
use crate::shared::metrics::METRICS;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 强力球核对命令行配置
#[derive(Parser, Debug, Clone)]
#[command(name = "powerball-checker")]
#[command(version)]
#[command(about = "Checks Powerball tickets against a drawing", long_about = None)]
pub struct CliConfig {
    /// 彩票CSV文件: Ticket Number,WB 1..WB 5,Powerball
    #[arg(short, long)]
    pub tickets: PathBuf,

    /// 开奖白球（5个，任意顺序）
    #[arg(short, long, num_args = 1.., value_delimiter = ',')]
    pub white: Vec<String>,

    /// 开奖红球
    #[arg(short, long)]
    pub powerball: String,

    /// 文件第一行即为数据（无表头）
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// 白球最大号码
    #[arg(long, default_value_t = u32::MAX)]
    pub white_max: u32,

    /// 红球最大号码
    #[arg(long, default_value_t = u32::MAX)]
    pub powerball_max: u32,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// 核对后输出Prometheus指标
    #[arg(long, default_value_t = false)]
    pub metrics: bool,

    /// 日志级别
    #[arg(short = 'l', long, default_value = "warn", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// 仅显示配置不执行核对（用于调试）
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            max_white_ball: self.white_max,
            max_powerball: self.powerball_max,
            ..Default::default()
        }
    }

    /// Draw tokens in load order: white balls, then the powerball
    pub fn draw_tokens(&self) -> Vec<&str> {
        self.white
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.powerball.as_str()))
            .collect()
    }
}

/// Runs the CLI application
pub fn run() -> ExitCode {
    let config = CliConfig::parse();

    init_logging(&config.log_level);
    tracing::debug!("配置: {:?}", config);

    if config.dry_run {
        println!("{}", render::config_summary(&config));
        return ExitCode::SUCCESS;
    }

    match execute(&config) {
        Ok(output) => {
            println!("{}", output);
            if config.metrics {
                print!("{}", METRICS.export());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "check failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads inputs, runs the check and renders the report
pub fn execute(config: &CliConfig) -> Result<String, Box<dyn std::error::Error>> {
    let rows = read_ticket_file(&config.tickets, !config.no_header)?;

    let mut service = CheckerService::with_config(config.validation_config());
    let summary = service.load_tickets(&rows);
    for rejected in &summary.rejected {
        tracing::warn!("{}", CheckerError::from(rejected.clone()));
    }
    if summary.validated_count() == 0 {
        return Err(CheckerError::NoValidTickets {
            rows: summary.total_rows(),
        }
        .into());
    }

    let draw = service.load_draw(&config.draw_tokens())?.clone();
    let report = service.check()?;

    let output = match config.format {
        OutputFormat::Text => render::report_text(report, &draw, &summary, &config.tickets),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&CheckReportDto::new(report, &draw, Some(&summary)))?
        }
    };

    Ok(output)
}

/// 初始化日志系统
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
