/*
[INPUT]:  Prepared request builders and per-call timeout budgets
[OUTPUT]: Parsed bodies or normalized errors, first-to-resolve-wins
[POS]:    HTTP layer - timeout race, cancellation, error normalization
[UPDATE]: When changing dispatch semantics or response handling
*/

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tokio::time;
use tracing::debug;

use crate::http::{Result, StocktakeClient, StocktakeError};

impl StocktakeClient {
    /// Send a request and parse a JSON body, using the default budget
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        self.send_json_with(builder, self.config().timeout).await
    }

    /// Send a request and parse a JSON body with an explicit budget
    pub(crate) async fn send_json_with<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        budget: Duration,
    ) -> Result<T> {
        let response = self.dispatch(builder, budget).await?;
        Ok(response.json().await?)
    }

    /// Send a request whose success body is plain text
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        let response = self.dispatch(builder, self.config().timeout).await?;
        Ok(response.text().await?)
    }

    /// Send a request and discard the success body
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<()> {
        self.send_unit_with(builder, self.config().timeout).await
    }

    pub(crate) async fn send_unit_with(
        &self,
        builder: RequestBuilder,
        budget: Duration,
    ) -> Result<()> {
        self.dispatch(builder, budget).await?;
        Ok(())
    }

    /// Race the request against its budget and the abort switch.
    ///
    /// Exactly one of {response, timeout, cancellation} resolves the call.
    /// On timeout the request future is dropped: a response arriving later
    /// is abandoned and can never reach caller state. Never retries.
    async fn dispatch(&self, builder: RequestBuilder, budget: Duration) -> Result<Response> {
        let cancel = self.cancel_handle();

        let response = tokio::select! {
            () = cancel.cancelled() => {
                debug!("request aborted through cancellation switch");
                return Err(StocktakeError::Cancelled);
            }
            outcome = time::timeout(budget, builder.send()) => match outcome {
                Err(_) => {
                    debug!(budget_secs = budget.as_secs(), "request exceeded timeout budget");
                    return Err(StocktakeError::Timeout { seconds: budget.as_secs() });
                }
                Ok(result) => result?,
            },
        };

        let status = response.status();
        // Server contract: anything above 200 is a failure, 3xx included.
        if status.as_u16() > 200 {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "server reported an error");
            return Err(StocktakeError::from_error_body(status, &body));
        }

        Ok(response)
    }
}
