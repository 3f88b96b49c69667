#[derive(Debug, Default)]
pub struct Metrics {
    pub checked: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Cases whose registered sizes came from a lookup rather than the case itself
    pub looked_up: usize,
}
