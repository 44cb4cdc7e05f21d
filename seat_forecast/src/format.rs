/// Formats a probability as a percentage for display.
///
/// Probabilities that would round to 100% or 0% are shown as `>99%` and
/// `<1%`. Inputs outside of [0, 1] are not clamped: they go through the same
/// comparisons (`1.5` is `>99%`, `-0.2` is `<1%`) and NaN is `NaN%`.
pub fn format_probability_percent(probability: f64) -> String {
    if probability >= 0.995 {
        ">99%".to_string()
    } else if probability < 0.005 {
        "<1%".to_string()
    } else {
        format!("{:.0}%", (probability * 100.0).round())
    }
}

#[cfg(test)]
mod tests {
    use super::format_probability_percent as fmt;

    #[test]
    fn boundaries() {
        assert_eq!(fmt(0.995), ">99%");
        assert_eq!(fmt(1.0), ">99%");
        assert_eq!(fmt(0.994999), "99%");
        assert_eq!(fmt(0.005), "1%");
        assert_eq!(fmt(0.004999), "<1%");
        assert_eq!(fmt(0.0), "<1%");
    }

    #[test]
    fn rounding() {
        assert_eq!(fmt(0.667), "67%");
        assert_eq!(fmt(0.554), "55%");
        assert_eq!(fmt(0.5), "50%");
        assert_eq!(fmt(0.125), "13%");
    }

    #[test]
    fn out_of_range() {
        assert_eq!(fmt(1.5), ">99%");
        assert_eq!(fmt(-0.2), "<1%");
        assert_eq!(fmt(f64::NAN), "NaN%");
    }
}
