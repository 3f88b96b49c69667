//! Checks a `sizes` attribute against its `srcset` and the image's layout.
//!
//! Every check runs on every call and each failing one adds a reason, so a
//! single pass reports all the problems at once.

use crate::attribute::{parse_sizes, parse_srcset, SizesEntry, SrcsetEntry};
use crate::context::{LayoutContext, IMAGE_BLOCK};
use crate::lookup::{RegisteredSize, SizeLookup};

/// Conditions which, when present in a media query, count as covering the viewport
pub const VIEWPORT_BREAKPOINTS: &[&str] = &[
    "(max-width: 300px)",
    "(max-width: 768px)",
    "(max-width: 1024px)",
    "(max-width: 1536px)",
    "(max-width: 2048px)",
];

pub const PRESET_SIZE_NAMES: &[&str] = &["thumbnail", "medium", "large", "full"];

/// The attributes of the image being checked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub sizes: String,
    pub srcset: String,
}

impl Media {
    pub fn new(sizes: &str, srcset: &str) -> Self {
        Self {
            sizes: sizes.to_owned(),
            srcset: srcset.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reasons: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            reasons: Vec::new(),
        }
    }
}

impl ValidationResult {
    fn fail(&mut self, reason: String) {
        debug!("Check failed: {}", reason);
        self.is_valid = false;
        self.reasons.push(reason);
    }
}

/// Run every check against already resolved registered sizes
pub fn check(
    sizes: &str,
    srcset: &str,
    context: &LayoutContext,
    registered_sizes: &[RegisteredSize],
) -> ValidationResult {
    let parsed_sizes = parse_sizes(sizes);
    let parsed_srcset = parse_srcset(srcset);
    let mut result = ValidationResult::default();

    check_block_type(context, &mut result);
    check_viewport_coverage(&parsed_sizes, &mut result);
    check_largest_source(&parsed_sizes, &parsed_srcset, &mut result);
    check_oversized(&parsed_sizes, context, &mut result);
    check_custom_sizes(&parsed_sizes, registered_sizes, &mut result);
    check_high_dpi(&parsed_srcset, &mut result);
    check_resized(&parsed_sizes, context, &mut result);
    check_preset_size(&parsed_sizes, context, registered_sizes, &mut result);

    result
}

/// Resolve the registered sizes for `attachment_id` and then run [`check`].
///
/// A failed lookup is logged and treated as no registered sizes.
pub async fn check_sizes(
    media: &Media,
    context: &LayoutContext,
    attachment_id: u64,
    lookup: &dyn SizeLookup,
) -> ValidationResult {
    let registered_sizes = match lookup.registered_sizes(attachment_id).await {
        Ok(sizes) => sizes,
        Err(e) => {
            warn!(
                "Unable to fetch registered sizes for attachment {}: {}",
                attachment_id, e
            );
            Vec::new()
        }
    };
    check(&media.sizes, &media.srcset, context, &registered_sizes)
}

fn check_block_type(context: &LayoutContext, result: &mut ValidationResult) {
    if let Some(block) = &context.block {
        if block != IMAGE_BLOCK {
            result.fail("Selected block is not an image.".to_owned());
        }
    }
}

fn check_viewport_coverage(sizes: &[SizesEntry], result: &mut ValidationResult) {
    let covers_viewport = sizes.iter().any(|size| {
        size.media == "100vw"
            || VIEWPORT_BREAKPOINTS
                .iter()
                .any(|breakpoint| size.media.contains(breakpoint))
    });
    if !covers_viewport {
        result.fail("The sizes attribute does not cover all viewport widths.".to_owned());
    }
}

fn check_largest_source(
    sizes: &[SizesEntry],
    srcset: &[SrcsetEntry],
    result: &mut ValidationResult,
) {
    let largest_width = srcset
        .iter()
        .filter_map(|source| source.width)
        .fold(None, |max: Option<f64>, width| {
            Some(max.map_or(width, |max| max.max(width)))
        });

    let has_largest_size = largest_width.is_some_and(|largest| {
        sizes
            .iter()
            .any(|size| size.value.is_some_and(|value| value >= largest))
    });
    if !has_largest_size {
        result.fail(
            "The largest image in srcset does not have a corresponding size.".to_owned(),
        );
    }
}

fn check_oversized(sizes: &[SizesEntry], context: &LayoutContext, result: &mut ValidationResult) {
    let container_max_width = context.container_max_width();
    let has_oversized = sizes
        .iter()
        .any(|size| size.value.is_some_and(|value| value > container_max_width));
    if has_oversized {
        result.fail(
            "One or more sizes values are larger than the container max width.".to_owned(),
        );
    }
}

fn check_custom_sizes(
    sizes: &[SizesEntry],
    registered_sizes: &[RegisteredSize],
    result: &mut ValidationResult,
) {
    for custom in registered_sizes {
        if !sizes.iter().any(|size| size.media.contains(&custom.name)) {
            result.fail(format!(
                "The sizes attribute does not include the custom image size: {}.",
                custom.name
            ));
        }
    }
}

fn check_high_dpi(srcset: &[SrcsetEntry], result: &mut ValidationResult) {
    let has_high_dpi = srcset
        .iter()
        .any(|source| source.density.is_some_and(|density| density >= 2.0));
    if !has_high_dpi {
        result.fail(
            "The srcset attribute does not include images for High DPI Displays.".to_owned(),
        );
    }
}

fn check_resized(sizes: &[SizesEntry], context: &LayoutContext, result: &mut ValidationResult) {
    let element = &context.element;
    if !(element.resized && element.has_changed_dimensions()) {
        return;
    }

    let resized_width = f64::from(element.rendered_width);
    let has_appropriate_size = sizes
        .iter()
        .any(|size| size.value.is_some_and(|value| value >= resized_width));
    if !has_appropriate_size {
        result.fail(
            "The image has the \".is-resized\" class, its dimensions have been changed, and the sizes attribute does not include an appropriate size for the resized image.".to_owned(),
        );
    }
}

fn check_preset_size(
    sizes: &[SizesEntry],
    context: &LayoutContext,
    registered_sizes: &[RegisteredSize],
    result: &mut ValidationResult,
) {
    let has_preset_size = registered_sizes
        .iter()
        .filter(|size| PRESET_SIZE_NAMES.contains(&size.name.as_str()))
        .any(|preset| {
            let Some(matching) = sizes.iter().find(|size| size.media.contains(&preset.name))
            else {
                return false;
            };

            if preset.name == "full" {
                return !context.element.has_changed_dimensions();
            }
            matching.value.is_some_and(|value| {
                f64::from(preset.width) == value || f64::from(preset.height) == value
            })
        });
    if !has_preset_size {
        result.fail(
            "The image size is not set to Thumbnail, Medium, Large, or Full Size, or the sizes attribute does not have a corresponding media query for the preset size.".to_owned(),
        );
    }
}
