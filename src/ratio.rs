use std::str::FromStr;

use crate::error::RatioError;


/// Checks that `text` looks like `37.5%`: a number in `[0, 100]` followed by a single `%`.
pub fn is_valid_percentage(text: &str) -> bool {
    if text.len() < 2 {
        return false;
    }
    let number = match text.strip_suffix('%') {
        Some(number) => number.trim_start(),
        None => return false,
    };
    if number.is_empty() {
        return false;
    }
    match number.parse::<f32>() {
        Ok(value) => value.is_finite() && value >= 0.0 && value <= 100.0,
        Err(_) => false,
    }
}

/// Converts an already validated percentage into a fraction. The range is not checked again.
pub fn percent_to_float(text: &str) -> Result<f32, RatioError> {
    let number = text.strip_suffix('%').ok_or_else(|| RatioError::MissingPercent(text.to_owned()))?;
    let value: f32 = number.trim_start().parse().map_err(|_| RatioError::Invalid(text.to_owned()))?;
    Ok(value / 100.0)
}


/// Weight of the first image in a blend, in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio(f32);

impl Ratio {

    pub const HALF: Ratio = Ratio(0.5);

    pub fn new(value: f32) -> Option<Self> {
        if value >= 0.0 && value <= 1.0 {
            Some(Ratio(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn inverse(&self) -> f32 {
        1.0 - self.0
    }
}

impl FromStr for Ratio {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_percentage(s) {
            return Err(RatioError::Invalid(s.to_owned()));
        }
        let value = percent_to_float(s)?;
        Ratio::new(value).ok_or_else(|| RatioError::Invalid(s.to_owned()))
    }
}


#[cfg(test)]
mod test {

    use std::str::FromStr;

    use super::is_valid_percentage;
    use super::percent_to_float;
    use super::Ratio;
    use crate::error::RatioError;

    #[test]
    fn test_rejects() {
        for input in &["", "%", "150%", "-5%", "abc%", "50", "50%x", "50%%", "nan%", "inf%", "1e3%", " %"] {
            assert!(!is_valid_percentage(input), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_accepts() {
        for input in &["0%", "100%", "37.5%", "50%", " 12%", "1e1%", "+5%", ".5%", "-0%"] {
            assert!(is_valid_percentage(input), "{:?} should be accepted", input);
        }
    }

    #[test]
    fn test_whole_range() {
        for p in 0 ..= 100 {
            let text = format!("{}%", p);
            assert!(is_valid_percentage(&text));
            let value = percent_to_float(&text).unwrap();
            assert!((value - p as f32 / 100.0).abs() < 1e-6, "{} -> {}", text, value);
        }
    }

    #[test]
    fn test_missing_percent() {
        match percent_to_float("50") {
            Err(RatioError::MissingPercent(s)) => assert_eq!(s, "50"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_no_range_check() {
        assert_eq!(percent_to_float("150%").unwrap(), 1.5);
    }

    #[test]
    fn test_ratio_parse() {
        let r = Ratio::from_str("25%").unwrap();
        assert_eq!(r.value(), 0.25);
        assert_eq!(r.inverse(), 0.75);
        assert!(Ratio::from_str("101%").is_err());
        assert!(Ratio::new(1.5).is_none());
        assert_eq!(Ratio::new(1.0).map(|r| r.value()), Some(1.0));
    }
}
