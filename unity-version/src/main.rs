use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use unity_version::commands::{self, VersionCommand};
use unity_version::services::ConfigService;

/// 编辑器版本号工具
#[derive(Debug, Parser)]
#[command(name = "unity-version", version, about)]
struct Cli {
    /// 从指定的 .env 文件读取日志配置
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: VersionCommand,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.env_file {
        Some(path) => ConfigService::load_from_file(path),
        None => ConfigService::load(),
    };

    // 初始化日志系统,guard 需保持到退出
    let _guard = match commands::init_logging(config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("日志系统初始化失败: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = commands::execute(cli.command);
    match &result {
        Ok(output) => {
            for line in &output.stdout {
                println!("{}", line);
            }
            for line in &output.stderr {
                eprintln!("{}", line);
            }
        }
        Err(err) => {
            error!(error = %err, "命令执行失败");
            eprintln!("{}", err);
        }
    }

    ExitCode::from(commands::exit_status(&result))
}
