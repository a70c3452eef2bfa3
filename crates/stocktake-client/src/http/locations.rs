/*
[INPUT]:  Location codes, filter triples, and scan submissions
[OUTPUT]: Location listings, scan confirmations, count resets
[POS]:    HTTP layer - Locations endpoints (require bearer token)
[UPDATE]: When adding new Locations query modes or changing bodies
*/

use reqwest::Method;
use url::form_urlencoded;

use crate::http::{Result, StocktakeClient};
use crate::types::{
    LocationFilter, LocationPage, LocationProduct, ScanProductRequest, ScannedLocation,
};

impl StocktakeClient {
    /// Query the location listing with filters and paging
    ///
    /// GET /Locations/?filter={json}&page={page}&limit={limit}&order={order}&sort={sort}
    pub async fn query_locations(
        &self,
        filters: &[LocationFilter],
        page: u32,
        limit: u32,
        order: u32,
        sort: &str,
    ) -> Result<LocationPage> {
        let filter_json = serde_json::to_string(filters)?;
        let filter: String = form_urlencoded::byte_serialize(filter_json.as_bytes()).collect();
        let endpoint =
            format!("Locations/?filter={filter}&page={page}&limit={limit}&order={order}&sort={sort}");

        let builder = self.authorized_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// List the products recorded against one location
    ///
    /// GET /Locations/?products=true&location={code}
    pub async fn location_products(&self, code: &str) -> Result<Vec<LocationProduct>> {
        let encoded: String = form_urlencoded::byte_serialize(code.as_bytes()).collect();
        let endpoint = format!("Locations/?products=true&location={encoded}");
        let builder = self.authorized_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Resolve a scanned or typed location code
    ///
    /// POST /Locations/?Scan=location with `{code}`
    pub async fn scan_location(&self, code: &str) -> Result<ScannedLocation> {
        let body = serde_json::json!({ "code": code });
        let builder = self
            .authorized_request(Method::POST, "Locations/?Scan=location")?
            .json(&body);
        self.send_json(builder).await
    }

    /// Record one product scan against a location.
    ///
    /// POST /Locations/?Scan=product. Uses the wider scan budget: the
    /// server reconciles the barcode against the item master on this call.
    pub async fn scan_product(&self, req: &ScanProductRequest) -> Result<()> {
        let builder = self
            .authorized_request(Method::POST, "Locations/?Scan=product")?
            .json(req);
        self.send_unit_with(builder, self.config().scan_timeout)
            .await
    }

    /// Close out the scanning session for a location
    ///
    /// PUT /Locations/?SubmitScan with `{id}`
    pub async fn submit_scan(&self, id: u64) -> Result<()> {
        let body = serde_json::json!({ "id": id });
        let builder = self
            .authorized_request(Method::PUT, "Locations/?SubmitScan")?
            .json(&body);
        self.send_unit(builder).await
    }

    /// Overwrite a location's physical count
    ///
    /// PUT /Locations/?ResetPhysicalCount with `{id, physicalCount}`
    pub async fn update_physical_count(&self, id: u64, physical_count: i64) -> Result<()> {
        let body = serde_json::json!({
            "id": id,
            "physicalCount": physical_count,
        });
        let builder = self
            .authorized_request(Method::PUT, "Locations/?ResetPhysicalCount")?
            .json(&body);
        self.send_unit(builder).await
    }

    /// Discard the scans recorded against a location
    ///
    /// DELETE /Locations/ with `{id, code}`
    pub async fn reset_scans(&self, id: u64, code: &str) -> Result<()> {
        let body = serde_json::json!({ "id": id, "code": code });
        let builder = self
            .authorized_request(Method::DELETE, "Locations/")?
            .json(&body);
        self.send_unit(builder).await
    }

    /// Zero out a location's system count
    ///
    /// DELETE /Locations/ with `{code, entity: "systemCount", id, store}`
    pub async fn reset_system_count(&self, id: u64, code: &str, store: u64) -> Result<()> {
        let body = serde_json::json!({
            "code": code,
            "entity": "systemCount",
            "id": id,
            "store": store,
        });
        let builder = self
            .authorized_request(Method::DELETE, "Locations/")?
            .json(&body);
        self.send_unit(builder).await
    }
}
