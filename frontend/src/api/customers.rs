use shared::api::ApiAck;
use shared::constants::{
    ADD_CUSTOMER_ACTION, CUSTOMERS_ACTION, RECORD_SPIN_ACTION, REMOVE_CUSTOMER_ACTION,
    VERIFY_CODE_ACTION,
};
use shared::customer::{
    AddCustomerRequest, Customer, CustomersResponse, RecordSpinRequest, RemoveCustomerRequest,
    VerifyCodeRequest, VerifyCodeResponse,
};

use super::{get_json, post_json};

pub async fn verify_code(code: String) -> Result<Customer, String> {
    let request = VerifyCodeRequest { code };
    let response: VerifyCodeResponse = post_json(VERIFY_CODE_ACTION, &request).await?;
    Ok(response.customer)
}

pub async fn add_customer(request: &AddCustomerRequest) -> Result<ApiAck, String> {
    post_json(ADD_CUSTOMER_ACTION, request).await
}

pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let response: CustomersResponse = get_json(CUSTOMERS_ACTION).await?;
    Ok(response.customers)
}

pub async fn remove_customer(code: String) -> Result<ApiAck, String> {
    let request = RemoveCustomerRequest { code };
    post_json(REMOVE_CUSTOMER_ACTION, &request).await
}

pub async fn record_spin(code: String) -> Result<ApiAck, String> {
    let request = RecordSpinRequest { code };
    post_json(RECORD_SPIN_ACTION, &request).await
}
