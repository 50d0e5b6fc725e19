/*
[INPUT]:  Optional error-simulation parameter
[OUTPUT]: Authentication status snapshot and error-test results
[POS]:    HTTP layer - Status endpoints
[UPDATE]: When adding new status endpoints or changing response format
*/

use reqwest::Method;

use crate::http::client::with_query;
use crate::http::{LockstepClient, Result};
use crate::types::{StatusModel, TestTimeoutModel};

impl LockstepClient {
    /// Verify that the application can reach the Lockstep Platform API.
    /// Always returns 200 OK regardless of authentication status.
    ///
    /// GET /api/v1/Status
    pub async fn ping(&self) -> Result<StatusModel> {
        let builder = self.api_request(Method::GET, "/api/v1/Status")?;
        self.send_json(builder).await
    }

    /// Ask the server to simulate an error condition. `err=500` produces a
    /// 500 response; `err=timeout` stalls about 90 seconds before
    /// returning 200; no parameter returns 200 immediately.
    ///
    /// GET /api/v1/Status/testing?err={err}
    pub async fn error_test(&self, err: Option<&str>) -> Result<TestTimeoutModel> {
        let mut query = Vec::new();
        if let Some(err) = err {
            query.push(("err", err.to_string()));
        }

        let endpoint = with_query("/api/v1/Status/testing", &query);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
