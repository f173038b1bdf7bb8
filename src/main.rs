mod cli;

use cli::Args;
use plugin_osv_filter::adapters::outbound::console::StderrProgressReporter;
use plugin_osv_filter::adapters::outbound::filesystem::FileSystemReader;
use plugin_osv_filter::application::dto::{FilterRequest, FilterResponse};
use plugin_osv_filter::application::factories::{PresenterFactory, PresenterType};
use plugin_osv_filter::application::use_cases::FilterVulnerabilitiesUseCase;
use plugin_osv_filter::config::{self, ConfigFile};
use plugin_osv_filter::dependency_attribution::policies::SuppressionList;
use plugin_osv_filter::ports::inbound::VulnerabilityFilterPort;
use plugin_osv_filter::ports::outbound::{ProgressReporter, ScanResultsReader};
use plugin_osv_filter::shared::error::ExitCode;
use plugin_osv_filter::shared::Result;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with 2 on invalid arguments, 0 on --help/--version
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("plugin_osv_filter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let suppressions = match &config {
        Some(config) => config.suppression_list()?,
        None => SuppressionList::builtin(),
    };
    let fail_on_findings = args.fail_on_findings
        || config
            .as_ref()
            .and_then(|c| c.fail_on_findings)
            .unwrap_or(false);

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let results = reader.read_scan_results(&args.results)?;

    let use_case = FilterVulnerabilitiesUseCase::new(reader, StderrProgressReporter::new())
        .with_suppressions(suppressions);
    let response = use_case.execute(FilterRequest::new(results, args.lockfile.clone()));

    let output = response.results.to_json_pretty()?;
    PresenterFactory::create(PresenterType::from_output(args.output)).present(&output)?;

    progress_reporter.report_completion(&summary(&response));

    if fail_on_findings && response.has_findings() {
        Ok(ExitCode::FindingsRemain)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Config comes only from `--config`; the plugin's own tree is never searched
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    args.config
        .as_deref()
        .map(config::load_config_from_path)
        .transpose()
}

fn summary(response: &FilterResponse) -> String {
    let summary = &response.summary;

    if let Some(bypass) = &response.bypass {
        return format!(
            "ℹ️  {} finding(s) passed through unfiltered ({})",
            summary.kept, bypass
        );
    }

    let mut lines = vec![format!(
        "✅ Filter complete: {} kept, {} suppressed, {} attributed to trusted packages",
        summary.kept,
        summary.suppressed,
        summary.attributed_total()
    )];
    for (root, count) in &summary.attributed {
        lines.push(format!("   - {}: {}", root, count));
    }
    lines.join("\n")
}
