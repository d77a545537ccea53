use crate::core::{
    config::Config,
    error::Result,
    export::{export, ExportReport, ExportRequest, Source},
    git::HistoryRequest,
    output::{format_summary, print_info, print_success},
};
use crate::render::Mode;
use clap::Args;
use std::path::PathBuf;

/// Options shared by every rendering command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// Output LaTeX file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Repository to read history from
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Lines of context around each change
    #[arg(short = 'U', long = "unified", value_name = "N", conflicts_with = "input")]
    pub unified: Option<u32>,

    /// Render previously captured git output instead of running git ("-" reads stdin)
    #[arg(long = "input", value_name = "FILE", conflicts_with = "repo")]
    pub input: Option<PathBuf>,
}

impl CommonArgs {
    /// Resolve these options and a git request into a complete export job
    pub fn into_request(
        self,
        mode: Mode,
        reference: String,
        max_commits: Option<usize>,
        default_output: PathBuf,
        config: &Config,
    ) -> ExportRequest {
        let source = match self.input {
            Some(path) => Source::Captured { path, mode },
            None => Source::Git {
                repo_dir: self.repo.unwrap_or_else(|| PathBuf::from(".")),
                request: HistoryRequest {
                    mode,
                    reference,
                    context_lines: self.unified.unwrap_or(config.context_lines),
                    max_commits,
                },
            },
        };

        ExportRequest {
            source,
            output: self.output.unwrap_or(default_output),
        }
    }
}

/// Run an export and report the result on the terminal
pub fn run_export(request: &ExportRequest) -> Result<ExportReport> {
    log::debug!("Export request: {request:?}");
    let report = export(request)?;

    print_success(&format!("Successfully generated {}", report.output.display()));
    print_info(&format_summary(&report.summary));

    Ok(report)
}
