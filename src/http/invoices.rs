/*
[INPUT]:  Invoice identifiers, query parameters, and invoice records
[OUTPUT]: Invoice records, query pages, summary views, and action results
[POS]:    HTTP layer - Invoices endpoints
[UPDATE]: When adding new invoice endpoints or changing query parameters
*/

use reqwest::Method;
use uuid::Uuid;

use crate::http::client::{searchlight_query, with_query};
use crate::http::{LockstepClient, Result};
use crate::types::{
    ActionResultModel, AtRiskInvoiceSummaryModel, FetchResult, InvoiceModel, InvoiceSummaryModel,
};

impl LockstepClient {
    /// Retrieve the invoice with the specified platform identifier (not the
    /// originating system's ERP key), optionally with nested collections.
    ///
    /// GET /api/v1/Invoices/{id}?include={include}
    pub async fn retrieve_invoice(&self, id: Uuid, include: Option<&str>) -> Result<InvoiceModel> {
        let mut query = Vec::new();
        if let Some(include) = include {
            query.push(("include", include.to_string()));
        }

        let endpoint = with_query(&format!("/api/v1/Invoices/{id}"), &query);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Change specific fields on an existing invoice; fields not named in
    /// the body remain unchanged.
    ///
    /// PATCH /api/v1/Invoices/{id}
    pub async fn update_invoice(&self, id: Uuid, body: &serde_json::Value) -> Result<InvoiceModel> {
        let endpoint = format!("/api/v1/Invoices/{id}");
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(body);
        self.send_json(builder).await
    }

    /// Delete the invoice referred to by this identifier.
    ///
    /// DELETE /api/v1/Invoices/{id}
    pub async fn delete_invoice(&self, id: Uuid) -> Result<ActionResultModel> {
        let endpoint = format!("/api/v1/Invoices/{id}");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_json(builder).await
    }

    /// Create one or more invoices and return the records as created.
    ///
    /// POST /api/v1/Invoices
    pub async fn create_invoices(&self, body: &[InvoiceModel]) -> Result<Vec<InvoiceModel>> {
        let builder = self
            .api_request(Method::POST, "/api/v1/Invoices")?
            .json(&body);
        self.send_json(builder).await
    }

    /// Query invoices using Searchlight filtering, sorting, nested fetch,
    /// and pagination.
    ///
    /// GET /api/v1/Invoices/query?filter=&include=&order=&pageSize=&pageNumber=
    pub async fn query_invoices(
        &self,
        filter: Option<&str>,
        include: Option<&str>,
        order: Option<&str>,
        page_size: Option<i32>,
        page_number: Option<i32>,
    ) -> Result<FetchResult<InvoiceModel>> {
        let query = searchlight_query(filter, include, order, page_size, page_number);
        let endpoint = with_query("/api/v1/Invoices/query", &query);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Query invoices and return the results in the condensed invoice
    /// summary view format.
    ///
    /// GET /api/v1/Invoices/views/summary?filter=&include=&order=&pageSize=&pageNumber=
    pub async fn query_invoice_summary_view(
        &self,
        filter: Option<&str>,
        include: Option<&str>,
        order: Option<&str>,
        page_size: Option<i32>,
        page_number: Option<i32>,
    ) -> Result<FetchResult<InvoiceSummaryModel>> {
        let query = searchlight_query(filter, include, order, page_size, page_number);
        let endpoint = with_query("/api/v1/Invoices/views/summary", &query);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Query at-risk invoices and return the results in the at-risk summary
    /// view format.
    ///
    /// GET /api/v1/Invoices/views/at-risk-summary?filter=&include=&order=&pageSize=&pageNumber=
    pub async fn query_at_risk_invoice_summary_view(
        &self,
        filter: Option<&str>,
        include: Option<&str>,
        order: Option<&str>,
        page_size: Option<i32>,
        page_number: Option<i32>,
    ) -> Result<FetchResult<AtRiskInvoiceSummaryModel>> {
        let query = searchlight_query(filter, include, order, page_size, page_number);
        let endpoint = with_query("/api/v1/Invoices/views/at-risk-summary", &query);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
