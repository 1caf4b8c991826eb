use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use ml_build::config::Cli;
use ml_build::install::PipInstaller;
use ml_build::{BuildError, BuildStage};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), BuildError> {
    let config = cli.into_config()?;
    let installer = PipInstaller::new(config.python.clone());
    let report = BuildStage::new(config, installer).run()?;
    info!(
        "训练集 {} 样本，测试集 {} 样本",
        report.train_len, report.test_len
    );
    Ok(())
}
