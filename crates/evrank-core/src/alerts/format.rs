//! Number formatting for alert messages.

/// Format an unsigned count with comma thousands separators (`425,000`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed one-decimal percent in parentheses, e.g. ` (+51.8%)`.
pub fn percent_suffix(percent: Option<f64>) -> String {
    percent
        .map(|pct| format!(" ({:+.1}%)", pct))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(425_000), "425,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_percent_suffix() {
        assert_eq!(percent_suffix(Some(51.8)), " (+51.8%)");
        assert_eq!(percent_suffix(Some(-12.0)), " (-12.0%)");
        assert_eq!(percent_suffix(None), "");
    }
}
