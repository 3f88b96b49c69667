use super::parse_number;

/// One candidate from a `srcset` attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SrcsetEntry {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub width: Option<f64>,
    /// Not part of the HTML grammar but accepted by some generators
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub density: Option<f64>,
}

impl SrcsetEntry {
    /// Apply a single descriptor such as `480w`, `2x` or `300h`.
    /// Unknown units are ignored and a later descriptor of the same unit wins.
    fn apply_descriptor(&mut self, descriptor: &str) {
        let mut chars = descriptor.chars();
        let unit = chars.next_back();
        let number = parse_number(chars.as_str());
        match unit {
            Some('w') => self.width = number,
            Some('h') => self.height = number,
            Some('x') => self.density = number,
            _ => {}
        }
    }
}

/// Split `srcset` into its candidates.
/// Example: `a.jpg 480w, b.jpg 2x` yields one entry with a width and one with a density.
pub fn parse_srcset(srcset: &str) -> Vec<SrcsetEntry> {
    srcset
        .split(',')
        .map(str::trim)
        .map(|source| {
            let mut tokens = source.split_whitespace();
            let mut entry = SrcsetEntry {
                url: tokens.next().unwrap_or_default().to_owned(),
                ..SrcsetEntry::default()
            };
            for descriptor in tokens {
                entry.apply_descriptor(descriptor);
            }
            entry
        })
        .collect()
}
