/*
[INPUT]:  Email identifiers, query parameters, and email records
[OUTPUT]: Email records, query pages, and action results
[POS]:    HTTP layer - Emails endpoints
[UPDATE]: When adding new email endpoints or changing query parameters
*/

use reqwest::Method;
use uuid::Uuid;

use crate::http::client::{searchlight_query, with_query};
use crate::http::{LockstepClient, Result};
use crate::types::{ActionResultModel, EmailModel, FetchResult};

impl LockstepClient {
    /// Retrieve the email with the specified identifier, optionally with
    /// nested collections (Attachments, CustomFields, Notes, ResponseOrigin).
    ///
    /// GET /api/v1/Emails/{id}?include={include}
    pub async fn retrieve_email(&self, id: Uuid, include: Option<&str>) -> Result<EmailModel> {
        let mut query = Vec::new();
        if let Some(include) = include {
            query.push(("include", include.to_string()));
        }

        let endpoint = with_query(&format!("/api/v1/Emails/{id}"), &query);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Change specific fields on an existing email; fields not named in the
    /// body remain unchanged.
    ///
    /// PATCH /api/v1/Emails/{id}
    pub async fn update_email(&self, id: Uuid, body: &serde_json::Value) -> Result<EmailModel> {
        let endpoint = format!("/api/v1/Emails/{id}");
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(body);
        self.send_json(builder).await
    }

    /// Delete the email referred to by this identifier.
    ///
    /// DELETE /api/v1/Emails/{id}
    pub async fn delete_email(&self, id: Uuid) -> Result<ActionResultModel> {
        let endpoint = format!("/api/v1/Emails/{id}");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_json(builder).await
    }

    /// Retrieve the signature logo for an email and increment its view
    /// count. The response body is the logo content, not JSON.
    ///
    /// GET /api/v1/Emails/{emailId}/logo/{nonce}
    pub async fn retrieve_email_logo(&self, email_id: Uuid, nonce: Uuid) -> Result<String> {
        let endpoint = format!("/api/v1/Emails/{email_id}/logo/{nonce}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_text(builder).await
    }

    /// Create one or more emails and return the records as created.
    ///
    /// POST /api/v1/Emails
    pub async fn create_emails(&self, body: &[EmailModel]) -> Result<Vec<EmailModel>> {
        let builder = self.api_request(Method::POST, "/api/v1/Emails")?.json(&body);
        self.send_json(builder).await
    }

    /// Query emails using Searchlight filtering, sorting, nested fetch, and
    /// pagination.
    ///
    /// GET /api/v1/Emails/query?filter=&include=&order=&pageSize=&pageNumber=
    pub async fn query_emails(
        &self,
        filter: Option<&str>,
        include: Option<&str>,
        order: Option<&str>,
        page_size: Option<i32>,
        page_number: Option<i32>,
    ) -> Result<FetchResult<EmailModel>> {
        let query = searchlight_query(filter, include, order, page_size, page_number);
        let endpoint = with_query("/api/v1/Emails/query", &query);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
