/// Records that belong to a campus block.
pub trait HasBlock {
    fn block(&self) -> &str;
}

/// Ordered list of distinct block names in first-appearance order.
pub fn distinct_blocks<T: HasBlock>(items: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|b| b == item.block()) {
            seen.push(item.block().to_string());
        }
    }
    seen
}
