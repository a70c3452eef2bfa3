/*
[INPUT]:  Bearer-authenticated listing request
[OUTPUT]: Per-operator scan totals
[POS]:    HTTP layer - scan operator endpoint (requires bearer token)
[UPDATE]: When the operator listing gains filters or paging
*/

use reqwest::Method;

use crate::http::{Result, StocktakeClient};
use crate::types::ScanOperator;

impl StocktakeClient {
    /// List every operator and their scan totals
    ///
    /// GET /ScanOperators/
    pub async fn scan_operators(&self) -> Result<Vec<ScanOperator>> {
        let builder = self.authorized_request(Method::GET, "ScanOperators/")?;
        self.send_json(builder).await
    }
}
