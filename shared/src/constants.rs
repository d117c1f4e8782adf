pub const CAMPAIGN_ACTION: &str = "campaign";
pub const LOGIN_ACTION: &str = "login";
pub const VERIFY_CODE_ACTION: &str = "verify-code";
pub const RECORD_SPIN_ACTION: &str = "record-spin";
pub const ADD_CUSTOMER_ACTION: &str = "add-customer";
pub const CUSTOMERS_ACTION: &str = "customers";
pub const REMOVE_CUSTOMER_ACTION: &str = "remove-customer";
pub const RECORDS_ACTION: &str = "records";
pub const GET_PRIZES_ACTION: &str = "get-prizes";
pub const SAVE_PRIZES_ACTION: &str = "save-prizes";

pub const INVALID_CODE_ERROR: &str = "Please enter a valid 4-digit code!";
pub const INVALID_PRICE_RANGE_ERROR: &str = "Minimum price must be less than maximum price!";
pub const INVALID_DATE_RANGE_ERROR: &str = "Start date must be before end date!";
pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const NO_RECORDS_ERROR: &str = "No records to export";

pub const CUSTOMER_CODE_LENGTH: usize = 4;

pub const BUSINESS_NAME: &str = "Sunkey Beauty Gallery";
pub const WHATSAPP_GREETING: &str = "Hello Sunkey Beauty Gallery, I want to buy wigs";
