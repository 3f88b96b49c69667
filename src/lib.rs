#![warn(clippy::all)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod advisor;
pub mod attribute;
pub mod context;
pub mod data;
pub mod error;
pub mod lookup;
pub mod metrics;
pub mod options;

use crate::advisor::{check, check_sizes};
use crate::context::{ElementGeometry, LayoutContext};
use crate::data::{Case, Report};
use crate::error::AppError;
use crate::lookup::{RegisteredSize, SizeLookup};
use crate::metrics::Metrics;
use crate::options::Options;

use std::fs::read_to_string;
use std::path::Path;

/// Reads a JSON array of cases
pub fn load_cases(path: &Path) -> Result<Vec<Case>, AppError> {
    let cases: Vec<Case> = serde_json::from_str(&read_to_string(path)?)?;
    debug!("Loaded {} cases from {}", cases.len(), path.to_string_lossy());
    Ok(cases)
}

/// Reads a JSON array of registered sizes
pub fn load_registered_sizes(path: &Path) -> Result<Vec<RegisteredSize>, AppError> {
    Ok(serde_json::from_str(&read_to_string(path)?)?)
}

/// Builds the single case described by command line flags
pub fn case_from_options(options: &Options) -> Result<Case, AppError> {
    let sizes = options
        .sizes
        .clone()
        .ok_or_else(|| AppError::MissingAttribute {
            name: "sizes".to_owned(),
        })?;
    let srcset = options
        .srcset
        .clone()
        .ok_or_else(|| AppError::MissingAttribute {
            name: "srcset".to_owned(),
        })?;

    Ok(Case {
        name: Some("media".to_owned()),
        sizes,
        srcset,
        context: LayoutContext {
            element: ElementGeometry {
                rendered_width: options.rendered_width,
                rendered_height: options.rendered_height,
                natural_width: options.natural_width,
                natural_height: options.natural_height,
                resized: options.resized,
            },
            alignment: options.alignment,
            viewport_width: options.viewport_width,
            block: options.block.clone(),
        },
        attachment_id: options.attachment_id,
        registered_sizes: None,
    })
}

/// Checks one case.
///
/// Sizes listed on the case win. Otherwise `lookup` is asked for the case's
/// attachment, and with no lookup there are no registered sizes.
pub async fn validate_case(
    case: &Case,
    index: usize,
    lookup: Option<&dyn SizeLookup>,
    m: &mut Metrics,
) -> Report {
    let name = case.display_name(index);
    let result = match (&case.registered_sizes, lookup) {
        (Some(registered_sizes), _) => {
            check(&case.sizes, &case.srcset, &case.context, registered_sizes)
        }
        (None, Some(lookup)) => {
            m.looked_up += 1;
            check_sizes(
                &case.media(),
                &case.context,
                case.attachment_id.unwrap_or_default(),
                lookup,
            )
            .await
        }
        (None, None) => check(&case.sizes, &case.srcset, &case.context, &[]),
    };

    m.checked += 1;
    if result.is_valid {
        m.valid += 1;
    } else {
        m.invalid += 1;
    }
    info!(
        "{} is {} ({} reasons)",
        name,
        if result.is_valid { "valid" } else { "invalid" },
        result.reasons.len()
    );
    Report::new(name, result)
}

/// Checks every case in order
pub async fn validate_cases(
    cases: &[Case],
    lookup: Option<&dyn SizeLookup>,
    m: &mut Metrics,
) -> Vec<Report> {
    let mut reports = Vec::with_capacity(cases.len());
    for (index, case) in cases.iter().enumerate() {
        reports.push(validate_case(case, index, lookup, m).await);
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::StaticSizes;
    use std::io::Write;
    use structopt::StructOpt;
    use tempfile::NamedTempFile;

    const CASES: &str = r#"[
        {
            "name": "robot",
            "sizes": "(max-width: 768px) 100vw, medium 300px",
            "srcset": "robot-300.jpg 300w, robot@2x.jpg 2x",
            "context": {"element": {"rendered_width": 300, "rendered_height": 225}}
        },
        {
            "sizes": "50vw",
            "srcset": "robot.jpg 1x",
            "registered_sizes": []
        }
    ]"#;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_cases() {
        let file = write_temp(CASES);
        let cases = load_cases(file.path()).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, Some("robot".to_owned()));
        assert_eq!(cases[1].registered_sizes, Some(vec![]));
    }

    #[test]
    fn test_load_cases_errors() {
        let result = load_cases(Path::new("/tmp/bad/path/cases.json"));
        assert!(matches!(result, Err(AppError::Io(_))));

        let file = write_temp("not json");
        let result = load_cases(file.path());
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn test_load_registered_sizes() {
        let file = write_temp(r#"[{"name": "medium", "width": 300, "height": 225}]"#);
        let sizes = load_registered_sizes(file.path()).unwrap();
        assert_eq!(sizes, vec![RegisteredSize::new("medium", 300, 225)]);
    }

    #[test]
    fn test_case_from_options() {
        let options = Options::from_iter(&[
            "srcset-advisor",
            "--sizes",
            "100vw",
            "--srcset",
            "robot.jpg 2x",
            "--rendered-width",
            "800",
            "--alignment",
            "alignwide",
            "--resized",
            "--attachment-id",
            "42",
        ]);
        let case = case_from_options(&options).unwrap();
        assert_eq!(case.sizes, "100vw");
        assert_eq!(case.srcset, "robot.jpg 2x");
        assert_eq!(case.context.element.rendered_width, 800);
        assert!(case.context.element.resized);
        assert_eq!(case.context.alignment, crate::context::Alignment::Wide);
        assert_eq!(case.context.viewport_width, 1280);
        assert_eq!(case.attachment_id, Some(42));
        assert_eq!(options.timeout, 10);
    }

    #[test]
    fn test_case_from_options_missing_srcset() {
        let options = Options::from_iter(&["srcset-advisor", "--sizes", "100vw"]);
        match case_from_options(&options) {
            Err(AppError::MissingAttribute { name }) => assert_eq!(name, "srcset"),
            other => panic!("Expected a missing attribute error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validate_cases() {
        init();
        let file = write_temp(CASES);
        let cases = load_cases(file.path()).unwrap();
        let lookup = StaticSizes(vec![RegisteredSize::new("medium", 300, 225)]);
        let mut m = Metrics::default();

        let reports = validate_cases(&cases, Some(&lookup as &dyn SizeLookup), &mut m).await;

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "robot");
        assert!(reports[0].result.is_valid);
        assert_eq!(reports[1].name, "case-2");
        assert!(!reports[1].result.is_valid);
        assert_eq!(m.checked, 2);
        assert_eq!(m.valid, 1);
        assert_eq!(m.invalid, 1);
        // The second case lists its own sizes
        assert_eq!(m.looked_up, 1);
    }

    #[tokio::test]
    async fn test_validate_case_without_lookup() {
        init();
        let cases = load_cases(write_temp(CASES).path()).unwrap();
        let mut m = Metrics::default();
        let report = validate_case(&cases[0], 0, None, &mut m).await;
        // Nothing registered means no preset size can match
        assert!(!report.result.is_valid);
        assert_eq!(m.looked_up, 0);
    }
}
