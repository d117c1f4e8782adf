use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::*;

/// One eligible customer as the server reports them. The prize is
/// assigned at registration time from the purchase amount; the spin
/// only reveals it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    pub amount: i64,
    pub prize: String,
    pub prize_color: String,
    pub prize_emoji: String,
    pub has_spun: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(custom = "validate_customer_code")]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AddCustomerRequest {
    #[validate(custom = "validate_customer_code")]
    pub code: String,
    pub amount: i64,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RecordSpinRequest {
    #[validate(custom = "validate_customer_code")]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RemoveCustomerRequest {
    #[validate(custom = "validate_customer_code")]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    #[serde(default)]
    pub success: bool,
    pub customer: Customer,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomersResponse {
    #[serde(default)]
    pub success: bool,
    pub customers: Vec<Customer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_wire_format_is_camel_case() {
        let json = r##"{
            "code": "4821",
            "phone": "08012345678",
            "amount": 75000,
            "prize": "1 Wig Stand",
            "prizeColor": "#17a2b8",
            "prizeEmoji": "🎪",
            "hasSpun": false
        }"##;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.code, "4821");
        assert_eq!(customer.prize_color, "#17a2b8");
        assert!(!customer.has_spun);
        assert_eq!(customer.name, "");
    }

    #[test]
    fn test_verify_request_validates_code() {
        let good = VerifyCodeRequest {
            code: "1234".to_string(),
        };
        assert!(good.validate().is_ok());

        let bad = VerifyCodeRequest {
            code: "12ab".to_string(),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_add_customer_request_validates_code() {
        let request = AddCustomerRequest {
            code: "99999".to_string(),
            amount: 120_000,
            name: String::new(),
            phone: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
