use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::application::RuntimeConfig;
use crate::normalizer::{self, NoticeSink, StdoutSink, WalkError, WalkReport};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<WalkReport, ApplicationError> {
        Self::run_with_sink(app_config, &mut StdoutSink::default())
    }

    pub fn run_with_sink(
        app_config: impl Into<RuntimeConfig>,
        sink: &mut impl NoticeSink,
    ) -> Result<WalkReport, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let report = normalizer::normalize_tree(&app_config.root, sink).context(WalkSnafu)?;
        info!("Finished walk: {}", report);
        if !report.failures.is_empty() {
            warn!(
                "{} rename(s) failed, the tree is only partially normalized",
                report.failures.len()
            );
        }

        Ok(report)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Cannot normalize the requested tree"))]
    WalkError { source: WalkError },
}
