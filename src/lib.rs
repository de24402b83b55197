// cargo watch -x 'fmt' -x 'test'

//! Resolve an ASN to its announced prefixes and collapse them into the
//! minimal covering set of CIDR blocks.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

pub use error::{Error, NetworkError, Result};
pub use processing::{build_report, collapse, collapse_prefixes, Report, Stats};

/// Look up `args.asn`, collapse both families and render the selected output.
///
/// Nothing is returned for printing unless every step succeeded.
pub async fn run(args: &cli::Args) -> Result<String> {
    log::info!("#Start run() asn={}", args.asn);
    let raw = source::fetch_prefixes(args.asn).await?;
    let report = build_report(&raw)?;
    output::render(&report, args.output_mode())
}
