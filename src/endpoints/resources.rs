use serde_json::Value;

use crate::client::HypixelClient;
use crate::error::Result;

impl HypixelClient {
    /// Fetch a static resource such as `achievements` or `skyblock/skills`.
    ///
    /// Accepts a [`Resource`](crate::models::Resource) or any path string.
    /// Resources are public, so the key is not sent.
    pub async fn resources(&self, resource: impl AsRef<str>) -> Result<Value> {
        let path = format!("resources/{}", resource.as_ref());
        self.request_keyless(&path).await
    }
}
