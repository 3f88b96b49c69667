use super::parse_number;

lazy_static::lazy_static! {
    // Whitespace run directly before a digit, i.e. where the size value starts
    static ref VALUE_BOUNDARY: regex::Regex = regex::Regex::new(r"\s+[0-9]").unwrap();
}

/// A media condition and the size chosen when it matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizesEntry {
    pub media: String,
    pub value: Option<f64>,
}

/// Parenthesis nesting depth at byte offset `end` of `size`
fn depth_at(size: &str, end: usize) -> i32 {
    size[..end].chars().fold(0, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}

/// Split `sizes` into media/value pairs.
///
/// Each token is split at the last whitespace outside parentheses that precedes a digit, so
/// `(max-width: 768px) 100vw` gives a media of `(max-width: 768px)` and a value of `100`.
/// A token without such a boundary, like a bare `300px` or a `calc()` value, is kept whole
/// as the media with no value.
pub fn parse_sizes(sizes: &str) -> Vec<SizesEntry> {
    sizes
        .split(',')
        .map(str::trim)
        .map(|size| {
            let boundary = VALUE_BOUNDARY
                .find_iter(size)
                .filter(|boundary| depth_at(size, boundary.start()) == 0)
                .last();
            (size, boundary)
        })
        .map(|(size, boundary)| match boundary {
            Some(boundary) => {
                // The boundary ends on an ASCII digit so this stays on a char boundary
                let value_start = boundary.end() - 1;
                SizesEntry {
                    media: size[..boundary.start()].trim().to_owned(),
                    value: parse_number(&size[value_start..]),
                }
            }
            None => SizesEntry {
                media: size.to_owned(),
                value: None,
            },
        })
        .collect()
}
