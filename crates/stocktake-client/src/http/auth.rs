/*
[INPUT]:  User credentials and candidate bearer tokens
[OUTPUT]: Server-issued tokens (fresh on login, refreshed on validation)
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When login or token validation contracts change
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Method;

use crate::http::{Result, StocktakeClient};
use crate::types::LoginResponse;

impl StocktakeClient {
    /// Exchange credentials for a bearer token
    ///
    /// POST /Login/ with `{username, password}` (password base64-encoded)
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({
            "username": username,
            "password": BASE64.encode(password),
        });

        let builder = self.api_request(Method::POST, "Login/")?.json(&body);
        self.send_json(builder).await
    }

    /// Validate a previously issued token against the server.
    ///
    /// GET /_ValidateToken/ with the candidate as bearer credential.
    /// 200 returns the (possibly refreshed) token as a plain-text body;
    /// any other status means the candidate is no longer valid.
    pub async fn validate_token(&self, candidate: &str) -> Result<String> {
        let builder = self
            .api_request(Method::GET, "_ValidateToken/")?
            .bearer_auth(candidate);
        self.send_text(builder).await
    }
}
