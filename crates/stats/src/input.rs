use tracing::trace;

use crate::error::AppError;

/// Ordered, non-empty list of finite numbers.
///
/// The only ways to build one are [`parse_nums`] and [`NumericList::new`],
/// so statistics never see an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericList(Vec<f64>);

impl NumericList {
    /// Returns `None` for an empty list or one holding a non-finite value.
    pub fn new(values: Vec<f64>) -> Option<Self> {
        if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
            return None;
        }
        Some(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept alongside `len` for slice-like callers.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Parse a comma-separated query value such as `"1,2.5,-3"`.
///
/// Tokens may carry surrounding whitespace; anything else that is not a
/// finite decimal number rejects the whole input.
pub fn parse_nums(raw: &str) -> Result<NumericList, AppError> {
    if raw.is_empty() {
        return Err(AppError::bad_request("nums are required."));
    }

    let mut values = Vec::new();
    for token in raw.split(',') {
        values.push(parse_token(token)?);
    }
    Ok(NumericList(values))
}

fn parse_token(token: &str) -> Result<f64, AppError> {
    let not_a_number = || AppError::bad_request(format!("{token} is not a number"));

    let trimmed = token.trim_matches(|c: char| c.is_ascii_whitespace());
    // f64::from_str also accepts "inf" and "NaN"; only finite decimals count.
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            trace!(token, value = v, "parsed number");
            Ok(v)
        }
        _ => Err(not_a_number()),
    }
}

#[cfg(test)]
mod tests {
    use super::{NumericList, parse_nums};
    use crate::error::AppError;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_in_input_order() {
        let nums = parse_nums("3,1.5,-2,1e3").unwrap();
        assert_eq!(nums.as_slice(), &[3.0, 1.5, -2.0, 1000.0]);
    }

    #[test]
    fn empty_input_is_required_error() {
        assert_eq!(
            parse_nums("").unwrap_err(),
            AppError::BadRequest("nums are required.".to_string())
        );
    }

    #[test]
    fn first_bad_token_is_reported() {
        assert_eq!(
            parse_nums("1,x,y").unwrap_err(),
            AppError::BadRequest("x is not a number".to_string())
        );
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let err = parse_nums("1,2abc").unwrap_err();
        assert_eq!(err.message(), "2abc is not a number");
    }

    #[test]
    fn non_finite_tokens_are_rejected() {
        assert!(parse_nums("1,inf").is_err());
        assert!(parse_nums("NaN").is_err());
        assert!(parse_nums("1e999").is_err());
    }

    #[test]
    fn empty_token_is_not_a_number() {
        assert_eq!(parse_nums("1,,2").unwrap_err().message(), " is not a number");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let nums = parse_nums(" 1, 2 ,3").unwrap();
        assert_eq!(nums.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn list_rejects_empty_and_non_finite() {
        assert!(NumericList::new(Vec::new()).is_none());
        assert!(NumericList::new(vec![1.0, f64::NAN]).is_none());
        let single = NumericList::new(vec![4.0]).unwrap();
        assert_eq!(single.len(), 1);
        assert!(!single.is_empty());
    }
}
