//! Layout facts about the image being checked.
//!
//! Everything the checks need from the page is passed in here, so the same
//! values always give the same verdict.

use std::convert::Infallible;
use std::str::FromStr;

/// The block name of an image in the block editor
pub const IMAGE_BLOCK: &str = "core/image";

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// How the image block is aligned inside its container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Alignment {
    #[default]
    None,
    Wide,
    Full,
}

impl Alignment {
    /// The widest a size value may be before it overflows the container
    pub fn container_max_width(self, rendered_width: u32, viewport_width: u32) -> f64 {
        match self {
            Alignment::Wide => f64::from(rendered_width) * 1.25,
            Alignment::Full => f64::from(viewport_width),
            Alignment::None => f64::from(rendered_width),
        }
    }
}

impl FromStr for Alignment {
    type Err = Infallible;

    /// Accepts both the attribute value (`wide`) and the class name (`alignwide`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "wide" | "alignwide" => Alignment::Wide,
            "full" | "alignfull" => Alignment::Full,
            _ => Alignment::None,
        })
    }
}

impl From<String> for Alignment {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Rendered and natural dimensions of the `img` element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementGeometry {
    pub rendered_width: u32,
    pub rendered_height: u32,
    pub natural_width: u32,
    pub natural_height: u32,
    /// The element carries the `is-resized` class
    pub resized: bool,
}

impl ElementGeometry {
    pub fn has_changed_dimensions(&self) -> bool {
        self.natural_width != self.rendered_width || self.natural_height != self.rendered_height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutContext {
    pub element: ElementGeometry,
    pub alignment: Alignment,
    pub viewport_width: u32,
    /// Name of the selected block, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            element: ElementGeometry::default(),
            alignment: Alignment::None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            block: None,
        }
    }
}

impl LayoutContext {
    pub fn container_max_width(&self) -> f64 {
        self.alignment
            .container_max_width(self.element.rendered_width, self.viewport_width)
    }

    pub fn with_alignment(&self, alignment: Alignment) -> Self {
        Self {
            alignment,
            ..self.clone()
        }
    }

    pub fn with_element(&self, element: ElementGeometry) -> Self {
        Self {
            element,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_from_str() {
        assert_eq!("alignwide".parse::<Alignment>().unwrap(), Alignment::Wide);
        assert_eq!("wide".parse::<Alignment>().unwrap(), Alignment::Wide);
        assert_eq!(" Full ".parse::<Alignment>().unwrap(), Alignment::Full);
        assert_eq!("alignfull".parse::<Alignment>().unwrap(), Alignment::Full);
        assert_eq!("center".parse::<Alignment>().unwrap(), Alignment::None);
        assert_eq!("".parse::<Alignment>().unwrap(), Alignment::None);
    }

    #[test]
    fn test_container_max_width() {
        assert_eq!(Alignment::Wide.container_max_width(800, 1200), 1000.0);
        assert_eq!(Alignment::Full.container_max_width(800, 1200), 1200.0);
        assert_eq!(Alignment::None.container_max_width(800, 1200), 800.0);
    }

    #[test]
    fn test_changed_dimensions() {
        let mut element = ElementGeometry {
            rendered_width: 640,
            rendered_height: 480,
            natural_width: 640,
            natural_height: 480,
            resized: true,
        };
        assert!(!element.has_changed_dimensions());
        element.rendered_height = 400;
        assert!(element.has_changed_dimensions());
    }

    #[test]
    fn test_layout_context_from_json() {
        let context: LayoutContext = serde_json::from_str(
            r#"{"element": {"rendered_width": 800, "resized": true}, "alignment": "alignwide"}"#,
        )
        .unwrap();
        assert_eq!(context.alignment, Alignment::Wide);
        assert_eq!(context.viewport_width, DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(context.element.rendered_width, 800);
        assert!(context.element.resized);
        assert_eq!(context.block, None);
        assert_eq!(context.container_max_width(), 1000.0);
    }
}
