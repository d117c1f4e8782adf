use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static WHATSAPP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{7,15}$").unwrap());

pub fn validate_customer_code(code: &str) -> Result<(), ValidationError> {
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_customer_code"));
    }
    Ok(())
}

pub fn validate_purchase_amount(amount: i64) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::new("invalid_purchase_amount"));
    }
    Ok(())
}

pub fn validate_price_range(min_price: i64, max_price: i64) -> Result<(), ValidationError> {
    if min_price < 0 || min_price >= max_price {
        return Err(ValidationError::new("invalid_price_range"));
    }
    Ok(())
}

/// Dates travel as `YYYY-MM-DD` strings, which order correctly as text.
pub fn validate_campaign_dates(start_date: &str, end_date: &str) -> Result<(), ValidationError> {
    if !DATE_REGEX.is_match(start_date) || !DATE_REGEX.is_match(end_date) {
        return Err(ValidationError::new("invalid_date"));
    }
    if start_date > end_date {
        return Err(ValidationError::new("invalid_date_range"));
    }
    Ok(())
}

pub fn validate_whatsapp_number(number: &str) -> Result<(), ValidationError> {
    if !WHATSAPP_REGEX.is_match(number) {
        return Err(ValidationError::new("invalid_whatsapp_number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_code_must_be_four_digits() {
        assert!(validate_customer_code("1234").is_ok());
        assert!(validate_customer_code("0007").is_ok());
        assert!(validate_customer_code("123").is_err());
        assert!(validate_customer_code("12345").is_err());
        assert!(validate_customer_code("12a4").is_err());
        assert!(validate_customer_code("").is_err());
        assert!(validate_customer_code("١٢٣٤").is_err());
    }

    #[test]
    fn test_price_range_bounds() {
        assert!(validate_price_range(0, 50_000).is_ok());
        assert!(validate_price_range(50_000, 50_000).is_err());
        assert!(validate_price_range(60_000, 50_000).is_err());
        assert!(validate_price_range(-1, 50_000).is_err());
    }

    #[test]
    fn test_campaign_dates_ordering() {
        assert!(validate_campaign_dates("2025-01-01", "2025-02-01").is_ok());
        assert!(validate_campaign_dates("2025-02-01", "2025-02-01").is_ok());
        assert!(validate_campaign_dates("2025-03-01", "2025-02-01").is_err());
        assert!(validate_campaign_dates("", "2025-02-01").is_err());
        assert!(validate_campaign_dates("01/02/2025", "02/02/2025").is_err());
    }

    #[test]
    fn test_whatsapp_number_shape() {
        assert!(validate_whatsapp_number("2348012345678").is_ok());
        assert!(validate_whatsapp_number("+2348012345678").is_ok());
        assert!(validate_whatsapp_number("12345").is_err());
        assert!(validate_whatsapp_number("not-a-number").is_err());
        assert!(validate_whatsapp_number("+234 801 234 5678").is_err());
    }

    #[test]
    fn test_purchase_amount_positive() {
        assert!(validate_purchase_amount(25_000).is_ok());
        assert!(validate_purchase_amount(0).is_err());
        assert!(validate_purchase_amount(-500).is_err());
    }
}
