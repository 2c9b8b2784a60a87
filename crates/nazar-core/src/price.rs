//! Price label parsing.

use crate::error::PriceError;

/// Extract the amount from a course price label.
///
/// The amount is the first whitespace-separated token: `"500000 so'm"`
/// yields `"500000"`. Labels that group digits with spaces
/// (`"500 000 so'm"`) only yield the first group; catalog prices are written
/// without spaces for this reason.
///
/// The token must start with a digit and contain only digits and the
/// separators `,` and `.`.
pub fn parse_price_amount(label: &str) -> Result<&str, PriceError> {
    let token = label.split_whitespace().next().ok_or(PriceError::Empty)?;

    let starts_with_digit = token.starts_with(|c: char| c.is_ascii_digit());
    let well_formed = token
        .chars()
        .all(|c| c.is_ascii_digit() || c == ',' || c == '.');

    if starts_with_digit && well_formed {
        Ok(token)
    } else {
        Err(PriceError::NotNumeric {
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_is_first_token() {
        assert_eq!(parse_price_amount("500000 so'm"), Ok("500000"));
        assert_eq!(parse_price_amount("  450000\tso'm"), Ok("450000"));
        assert_eq!(parse_price_amount("1,200,000 so'm"), Ok("1,200,000"));
    }

    #[test]
    fn test_bare_amount() {
        assert_eq!(parse_price_amount("300000"), Ok("300000"));
    }

    #[test]
    fn test_grouped_digits_keep_first_group() {
        assert_eq!(parse_price_amount("500 000 so'm"), Ok("500"));
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(parse_price_amount(""), Err(PriceError::Empty));
        assert_eq!(parse_price_amount("   "), Err(PriceError::Empty));
    }

    #[test]
    fn test_label_without_leading_amount() {
        assert_eq!(
            parse_price_amount("Bepul"),
            Err(PriceError::NotNumeric {
                token: "Bepul".to_string()
            })
        );
        assert_eq!(
            parse_price_amount("$500 oyiga"),
            Err(PriceError::NotNumeric {
                token: "$500".to_string()
            })
        );
        assert!(parse_price_amount("500k so'm").is_err());
    }
}
