use std::path::PathBuf;

use common_utils::consts;
use domain_types::types::GatewayConfig;

use crate::logger::config::Log;

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub common: Common,
    #[serde(default)]
    pub log: Log,
    pub gateway: GatewayConfig,
}

#[derive(Clone, serde::Deserialize, Debug, Default)]
pub struct Common {
    #[serde(default)]
    pub environment: consts::Env,
}

impl Common {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let Self { environment } = self;
        match environment {
            consts::Env::Development | consts::Env::Production | consts::Env::Sandbox => Ok(()),
        }
    }
}

impl Config {
    /// Reads `explicit_config_path` (or `config/<env>.toml`) and applies `ECOMM__*`
    /// environment overrides on top.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        config.common.validate()?;

        Ok(config)
    }

    pub fn builder(
        environment: &consts::Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // "env" is set as an override so files cannot change it.
            .set_override("env", environment.to_string())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        match explicit_config_path {
            Some(path) => path,
            None => {
                let mut config_path = workspace_path();
                config_path.push("config");
                config_path.push(environment.config_path());
                config_path
            }
        }
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
