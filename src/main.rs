#![warn(clippy::all, clippy::pedantic)]
extern crate env_logger;
#[macro_use]
extern crate log;

use env_logger::Env;
use std::time::Duration;

use anyhow::{Context, Result};
use srcset_advisor::lookup::{RestSizeLookup, SizeLookup, StaticSizes};
use srcset_advisor::metrics::Metrics;
use srcset_advisor::options::Options;
use structopt::StructOpt;

///
/// Checks the `sizes` and `srcset` attributes of responsive images.
/// A single image is described with flags, or many at once with `--input cases.json`.
///
/// Exits with status 1 when any image fails a check.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or("SRCSET_ADVISOR_LOG", "info")).init();

    let options = Options::from_args();

    let cases = match &options.input {
        Some(path) => srcset_advisor::load_cases(path)
            .with_context(|| format!("Failed to load cases from {}", path.to_string_lossy()))?,
        None => vec![srcset_advisor::case_from_options(&options)?],
    };

    let lookup: Option<Box<dyn SizeLookup>> = match (&options.endpoint, &options.registered_sizes)
    {
        (Some(endpoint), _) => Some(Box::new(RestSizeLookup::with_timeout(
            endpoint,
            Duration::from_secs(options.timeout),
        )) as Box<dyn SizeLookup>),
        (None, Some(path)) => {
            let sizes = srcset_advisor::load_registered_sizes(path).with_context(|| {
                format!(
                    "Failed to load registered sizes from {}",
                    path.to_string_lossy()
                )
            })?;
            Some(Box::new(StaticSizes(sizes)) as Box<dyn SizeLookup>)
        }
        (None, None) => None,
    };

    let mut metrics = Metrics::default();
    let reports =
        srcset_advisor::validate_cases(&cases, lookup.as_deref(), &mut metrics).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{report}");
        }
    }

    info!(
        "Checked {} images: {} valid, {} invalid",
        metrics.checked, metrics.valid, metrics.invalid
    );
    debug!("{:?}", metrics);

    if metrics.invalid > 0 {
        std::process::exit(1);
    }
    Ok(())
}
