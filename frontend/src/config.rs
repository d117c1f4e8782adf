use web_sys::window;

const PRODUCTION_API_URL: &str = "https://v2.hireboothub.com/spin-win-api/api.php";

pub fn get_api_url() -> String {
    // Check if we're running on the production host or elsewhere
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if host.contains("hireboothub.com") {
                // Stay same-origin when served next to the API
                return "/spin-win-api/api.php".to_string();
            }
        }
    }

    // Local development and previews talk to production directly
    PRODUCTION_API_URL.to_string()
}

/// Endpoint for one API action, e.g. `…/api.php?action=verify-code`.
pub fn action_url(action: &str) -> String {
    format!("{}?action={}", get_api_url(), action)
}
