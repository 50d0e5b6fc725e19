/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust resource models with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new models added
*/

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A currency conversion rate from one currency to another as of a
/// specific date, as returned by the Currencies endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRateModel {
    pub source_currency: Option<String>,
    pub destination_currency: Option<String>,
    pub date: Option<NaiveDate>,
    pub currency_rate: Option<Decimal>,
}

/// An Email represents a communication sent from one company to another.
/// The creator is identified by `company_id`, recipients by `email_to`
/// and `email_cc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailModel {
    pub email_id: Option<Uuid>,
    pub thread_id: Option<Uuid>,
    pub group_key: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub email_from: Option<String>,
    pub email_to: Option<String>,
    pub email_cc: Option<String>,
    pub email_subject: Option<String>,
    pub email_body: Option<String>,
    pub sent_date: Option<DateTime<Utc>>,
    pub is_unread: Option<bool>,
    pub is_priority: Option<bool>,
    pub is_spam: Option<bool>,
    pub view_count: Option<i32>,
    pub response_origin_id: Option<Uuid>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<Uuid>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<Uuid>,
}

/// An Invoice represents a bill sent from one company to another. The
/// creator is identified by `company_id`, the recipient by `customer_id`.
/// Invoices are identified both by a platform ID and by the `erp_key`
/// generated by the originating system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceModel {
    pub group_key: Option<Uuid>,
    pub invoice_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub erp_key: Option<String>,
    pub purchase_order_code: Option<String>,
    pub reference_code: Option<String>,
    pub salesperson_code: Option<String>,
    pub salesperson_name: Option<String>,
    pub invoice_type_code: Option<String>,
    pub invoice_status_code: Option<String>,
    pub terms_code: Option<String>,
    pub special_terms: Option<String>,
    pub currency_code: Option<String>,
    pub total_amount: Option<Decimal>,
    pub sales_tax_amount: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub outstanding_balance_amount: Option<Decimal>,
    pub invoice_date: Option<NaiveDate>,
    pub discount_date: Option<NaiveDate>,
    pub posted_date: Option<NaiveDate>,
    pub invoice_closed_date: Option<NaiveDate>,
    pub payment_due_date: Option<NaiveDate>,
    pub imported_date: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    pub created_user_id: Option<Uuid>,
    pub modified: Option<DateTime<Utc>>,
    pub modified_user_id: Option<Uuid>,
}

/// Condensed invoice data as returned by the invoice summary view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummaryModel {
    pub group_key: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub invoice_id: Option<Uuid>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub customer_name: Option<String>,
    pub status: Option<String>,
    pub payment_due_date: Option<NaiveDate>,
    pub invoice_amount: Option<Decimal>,
    pub outstanding_balance: Option<Decimal>,
    pub invoice_type_code: Option<String>,
    pub newest_activity: Option<NaiveDate>,
    pub days_past_due: Option<i32>,
}

/// Condensed invoice data as returned by the at-risk invoice summary view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskInvoiceSummaryModel {
    pub report_date: Option<NaiveDate>,
    pub group_key: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub invoice_id: Option<Uuid>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub customer_name: Option<String>,
    pub status: Option<String>,
    pub payment_due_date: Option<NaiveDate>,
    pub invoice_amount: Option<Decimal>,
    pub outstanding_balance: Option<Decimal>,
    pub invoice_type_code: Option<String>,
    pub newest_activity: Option<NaiveDate>,
    pub days_past_due: Option<i32>,
}

/// A company record as represented in an external financial or ERP system,
/// used when importing data into the platform.
///
/// The `erp_key` is the record's primary key in the originating system and
/// must be a unique, non-changing identifier there. `parent_company_erp_key`
/// links a child company to its parent's `erp_key` and stays `None` for
/// top-level companies. Validation of all fields is server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySyncModel {
    pub erp_key: Option<String>,
    pub company_name: Option<String>,
    /// One of `Company`, `Customer`, `Group`, `Vendor`, `Third Party`,
    /// or `CustomerVendor`
    pub company_type: Option<String>,
    /// `Active` or `Inactive`
    pub company_status: Option<String>,
    pub parent_company_erp_key: Option<String>,
    pub is_active: Option<bool>,
    pub default_currency_code: Option<String>,
    pub company_logo_url: Option<String>,
    pub primary_contact_erp_key: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub fax_number: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub tax_id: Option<String>,
    pub duns_number: Option<String>,
    pub ap_email_address: Option<String>,
    pub ar_email_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_sync_model_round_trip() {
        let model = CompanySyncModel {
            erp_key: Some("COMP-001".to_string()),
            company_name: Some("Acme Corp".to_string()),
            company_type: Some("Customer".to_string()),
            parent_company_erp_key: None,
            is_active: Some(true),
            default_currency_code: Some("USD".to_string()),
            created: Some("2022-01-15T08:30:00Z".parse().expect("created")),
            ..Default::default()
        };

        let json = serde_json::to_value(&model).expect("serialize");
        // Unset optional fields serialize as explicit nulls
        assert_eq!(json["companyStatus"], serde_json::Value::Null);
        assert_eq!(json["erpKey"], "COMP-001");

        let back: CompanySyncModel = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, model);
    }

    #[test]
    fn test_invoice_model_deserializes_wire_names() {
        let json = r#"{
            "erpKey": "INV-100",
            "invoiceTypeCode": "Invoice",
            "totalAmount": 1500.25,
            "outstandingBalanceAmount": 750.5,
            "invoiceDate": "2022-03-01",
            "paymentDueDate": "2022-03-31"
        }"#;

        let invoice: InvoiceModel = serde_json::from_str(json).expect("deserialize");
        assert_eq!(invoice.erp_key.as_deref(), Some("INV-100"));
        assert_eq!(invoice.total_amount, Some("1500.25".parse().expect("amount")));
        assert_eq!(
            invoice.invoice_date,
            Some("2022-03-01".parse().expect("date"))
        );
        assert_eq!(invoice.company_id, None);
    }
}
