use crate::commands::shared::{run_export, CommonArgs};
use crate::core::{
    config::Config,
    error::Result,
    export::{ExportReport, ExportRequest},
};
use crate::render::Mode;
use clap::Args;

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LogArgs {
    /// Revision or range to walk (e.g., HEAD, main..feature, v1.0..)
    #[arg(value_name = "REVISION", conflicts_with = "input")]
    pub revision: Option<String>,

    /// Limit the number of commits rendered
    #[arg(short = 'n', long = "max-count", value_name = "N", conflicts_with = "input")]
    pub max_count: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl LogArgs {
    pub fn into_request(self, config: &Config) -> ExportRequest {
        let revision = self
            .revision
            .unwrap_or_else(|| config.default_ref.clone());
        let max_commits = self.max_count.or(config.max_commits);

        self.common.into_request(
            Mode::FullHistory,
            revision,
            max_commits,
            config.log_output.clone(),
            config,
        )
    }
}

/// Render `git log --patch` as a LaTeX document with one section per commit
pub fn execute_log(args: LogArgs, config: &Config) -> Result<ExportReport> {
    run_export(&args.into_request(config))
}
