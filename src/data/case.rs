use crate::advisor::Media;
use crate::context::LayoutContext;
use crate::lookup::RegisteredSize;

/// One image to check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub name: Option<String>,
    pub sizes: String,
    pub srcset: String,
    #[serde(default)]
    pub context: LayoutContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub attachment_id: Option<u64>,
    /// When present these are used instead of asking a lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub registered_sizes: Option<Vec<RegisteredSize>>,
}

impl Case {
    pub fn media(&self) -> Media {
        Media::new(&self.sizes, &self.srcset)
    }

    /// The case name, or its position in the input when it has none
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("case-{}", index + 1))
    }
}
