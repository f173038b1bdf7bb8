use clap::Parser;
use std::path::PathBuf;

/// Drop vulnerability findings that a Grafana plugin inherits from the
/// Grafana SDK packages it depends on
#[derive(Parser, Debug)]
#[command(name = "plugin-osv-filter")]
#[command(version)]
#[command(about = "Attribute osv-scanner findings to trusted Grafana packages", long_about = None)]
pub struct Args {
    /// Lockfile the scan was run against (yarn.lock, package-lock.json,
    /// npm-shrinkwrap.json, pnpm-lock.yaml or go.mod)
    #[arg(short, long, value_name = "PATH")]
    pub lockfile: PathBuf,

    /// osv-scanner JSON report; "-" reads stdin
    #[arg(short, long, value_name = "PATH")]
    pub results: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Operator config file (suppressions, fail_on_findings)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when findings remain after filtering
    #[arg(long)]
    pub fail_on_findings: bool,

    /// Log filter decisions (debug level) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
