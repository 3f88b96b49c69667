use structopt::StructOpt;

use std::path::PathBuf;

use crate::context::Alignment;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "srcset-advisor",
    about = "Checks that a responsive image's sizes attribute fits its srcset and layout"
)]
pub struct Options {
    /// The sizes attribute to check
    #[structopt(long = "sizes")]
    pub sizes: Option<String>,

    /// The srcset attribute to check
    #[structopt(long = "srcset")]
    pub srcset: Option<String>,

    /// The width the image is rendered at
    #[structopt(long = "rendered-width", default_value = "0")]
    pub rendered_width: u32,

    #[structopt(long = "rendered-height", default_value = "0")]
    pub rendered_height: u32,

    /// The intrinsic width of the image file
    #[structopt(long = "natural-width", default_value = "0")]
    pub natural_width: u32,

    #[structopt(long = "natural-height", default_value = "0")]
    pub natural_height: u32,

    /// The image carries the is-resized class
    #[structopt(long = "resized")]
    pub resized: bool,

    /// Block alignment: none, wide or full
    #[structopt(short = "a", long = "alignment", default_value = "none")]
    pub alignment: Alignment,

    #[structopt(long = "viewport-width", default_value = "1280")]
    pub viewport_width: u32,

    /// The name of the selected block, e.g. core/image
    #[structopt(long = "block")]
    pub block: Option<String>,

    /// A JSON file listing the registered image sizes
    #[structopt(long = "registered-sizes", parse(from_os_str))]
    pub registered_sizes: Option<PathBuf>,

    /// Base URL of a WordPress site to fetch registered sizes from
    #[structopt(long = "endpoint", conflicts_with = "registered_sizes")]
    pub endpoint: Option<String>,

    /// Seconds to wait for the endpoint before treating it as having no sizes
    #[structopt(long = "timeout", default_value = "10")]
    pub timeout: u64,

    /// The attachment whose registered sizes should be fetched
    #[structopt(long = "attachment-id")]
    pub attachment_id: Option<u64>,

    /// A JSON file of cases to check instead of the single case given by flags
    #[structopt(short = "i", long = "input", parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Print the reports as JSON
    #[structopt(long = "json")]
    pub json: bool,
}
