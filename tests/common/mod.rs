#![allow(dead_code)]

use hypixel_api::{ClientConfig, HypixelClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-key";

pub fn client_for(server: &MockServer) -> HypixelClient {
    HypixelClient::with_config(ClientConfig::new(TEST_KEY).with_base_url(server.uri())).unwrap()
}

pub fn success_body() -> Value {
    json!({ "success": true })
}

pub fn invalid_key_body() -> Value {
    json!({ "success": false, "cause": "Invalid API key" })
}
