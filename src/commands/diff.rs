use crate::commands::shared::{run_export, CommonArgs};
use crate::core::{
    config::Config,
    error::Result,
    export::{ExportReport, ExportRequest},
};
use crate::render::Mode;
use clap::Args;

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffArgs {
    /// Git reference to diff against (e.g., HEAD~1, main, commit hash)
    #[arg(long = "ref", value_name = "REF", conflicts_with = "input")]
    pub reference: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl DiffArgs {
    pub fn into_request(self, config: &Config) -> ExportRequest {
        let reference = self
            .reference
            .unwrap_or_else(|| config.default_ref.clone());

        self.common.into_request(
            Mode::DiffOnly,
            reference,
            None,
            config.diff_output.clone(),
            config,
        )
    }
}

/// Render `git diff <ref>` as a LaTeX document
pub fn execute_diff(args: DiffArgs, config: &Config) -> Result<ExportReport> {
    run_export(&args.into_request(config))
}
