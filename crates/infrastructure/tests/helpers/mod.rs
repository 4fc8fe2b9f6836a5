#![allow(dead_code)]

use area_domain::config::ApiConfig;
use area_infrastructure::ApiClient;
use wiremock::MockServer;

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        user_agent: "area-catalog-tests".to_string(),
    }
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&api_config(&server.uri())).unwrap()
}
