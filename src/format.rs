/// Format value with at most two decimals, dropping trailing zeros.
pub fn compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".into(),
        _ => trimmed.into(),
    }
}

/// Placeholder for a missing value.
pub const NOT_AVAILABLE: &str = "N/A";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer() {
        assert_eq!(compact(35.0), "35");
    }

    #[test]
    fn fraction() {
        assert_eq!(compact(12.5), "12.5");
        assert_eq!(compact(0.25), "0.25");
    }

    #[test]
    fn zero() {
        assert_eq!(compact(0.0), "0");
        assert_eq!(compact(-0.001), "0");
    }

    #[test]
    fn negative() {
        assert_eq!(compact(-793.0), "-793");
    }
}
