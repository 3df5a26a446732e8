use std::process::ExitCode;

use clap::Parser;
use common_utils::CustomResult;
use ecomm_client::{
    cli::Cli,
    configs,
    error::{ClientError, ConfigurationError, ReportSwitchExt},
    logger, PaymentClient,
};
use error_stack::{report, ResultExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            #[allow(clippy::print_stdout)]
            {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("{error:?}");
            }
            ExitCode::from(error.current_context().exit_code())
        }
    }
}

async fn run(cli: Cli) -> CustomResult<String, ClientError> {
    let config = configs::Config::new_with_config_path(cli.config)
        .map_err(|error| report!(ConfigurationError::from(error)))
        .switch()?;

    logger::setup(
        &config.log,
        [
            ecomm_client::service_name!(),
            "connector_integration",
            "external_services",
        ],
    )
    .map_err(|error| report!(ConfigurationError::from(error)))
    .switch()?;

    logger::info!(
        environment = %config.common.environment,
        gateway = %config.gateway.base_url,
        "ecomm client configured"
    );

    let client = PaymentClient::from_config(&config.gateway).switch()?;
    let response = cli.command.execute(&client).await.switch()?;

    serde_json::to_string_pretty(&response).change_context(ClientError::Operation)
}
