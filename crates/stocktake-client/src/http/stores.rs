/*
[INPUT]:  Free-text store search queries
[OUTPUT]: Matching stores for session selection
[POS]:    HTTP layer - store lookup endpoint (requires bearer token)
[UPDATE]: When store search parameters change
*/

use reqwest::Method;
use url::form_urlencoded;

use crate::http::{Result, StocktakeClient};
use crate::types::Store;

impl StocktakeClient {
    /// Search stores by name fragment
    ///
    /// GET /Stores/?query={query}
    pub async fn search_stores(&self, query: &str) -> Result<Vec<Store>> {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let endpoint = format!("Stores/?query={encoded}");
        let builder = self.authorized_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
