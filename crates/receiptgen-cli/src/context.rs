use anyhow::Result;
use once_cell::sync::OnceCell;
use receiptgen_runtime::{
    Config, HostContextAdapter, HostPlatform, HttpGenerationService, InitDataHost,
    SubmissionController,
};
use receiptgen_types::HostIdentity;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::args::Cli;
use crate::types::OutputFormat;

pub type CloseHook = Box<dyn Fn() + Send + Sync>;

/// Launch inputs and lazily loaded config for one invocation
pub struct ExecutionContext {
    config_path: PathBuf,
    endpoint: Option<String>,
    launch_url: Option<String>,
    init_data: Option<String>,
    theme_params: Option<String>,
    pub format: OutputFormat,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };

        Ok(Self {
            config_path,
            endpoint: cli.endpoint.clone(),
            launch_url: cli.launch_url.clone(),
            init_data: cli.init_data.clone(),
            theme_params: cli.theme_params.clone(),
            format: cli.format,
            config: OnceCell::new(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// File values with command-line overrides applied
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config = Config::load_from(&self.config_path)?;
            Ok(config.with_endpoint(self.endpoint.clone()))
        })
    }

    /// Host platform from launch init data; `None` runs standalone
    pub fn host(&self, on_close: Option<CloseHook>) -> Result<Option<Arc<dyn HostPlatform>>> {
        let Some(init_data) = self.init_data.as_deref().filter(|d| !d.trim().is_empty()) else {
            return Ok(None);
        };

        let mut host = InitDataHost::parse(init_data, self.theme_params.as_deref())?;
        if let Some(hook) = on_close {
            host = host.with_close_hook(hook);
        }
        let host: Arc<dyn HostPlatform> = Arc::new(host);
        Ok(Some(host))
    }

    pub fn identity(&self, host: Option<Arc<dyn HostPlatform>>) -> HostIdentity {
        HostContextAdapter::new(host).resolve(self.launch_url.as_deref())
    }

    pub fn controller(&self, host: Option<Arc<dyn HostPlatform>>) -> Result<SubmissionController> {
        let config = self.config()?;
        let service =
            HttpGenerationService::new(config.endpoint.clone(), config.request_timeout())?;
        tracing::debug!(endpoint = %service.endpoint(), "generation service ready");
        Ok(SubmissionController::new(Arc::new(service), host))
    }
}
