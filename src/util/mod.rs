use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod logging;
pub mod persistence;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Formats an amount of Beli as `$1,234,567`.
pub fn format_value(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0), "$0");
        assert_eq!(format_value(999), "$999");
        assert_eq!(format_value(1_000), "$1,000");
        assert_eq!(format_value(1_500_000), "$1,500,000");
        assert_eq!(format_value(100_000_000), "$100,000,000");
    }

    #[test]
    fn test_generate_id_is_unique() {
        let first = generate_id("toast");
        let second = generate_id("toast");
        assert_ne!(first, second);
        assert!(first.starts_with("toast-"));
    }
}
