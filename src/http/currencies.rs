/*
[INPUT]:  Currency codes, rate dates, and bulk conversion requests
[OUTPUT]: Currency conversion rates
[POS]:    HTTP layer - Currencies endpoints
[UPDATE]: When adding new currency endpoints or changing response format
*/

use chrono::NaiveDate;
use reqwest::Method;

use crate::http::client::with_query;
use crate::http::{LockstepClient, Result};
use crate::types::{BulkCurrencyConversionModel, CurrencyRateModel};

impl LockstepClient {
    /// Retrieve the conversion rate from one currency to another as of the
    /// specified date, optionally from a specific data provider.
    ///
    /// GET /api/v1/Currencies/{source}/{destination}?date={date}&dataProvider={dataProvider}
    pub async fn retrieve_currency_rate(
        &self,
        source_currency: &str,
        destination_currency: &str,
        date: Option<NaiveDate>,
        data_provider: Option<&str>,
    ) -> Result<CurrencyRateModel> {
        let mut query = Vec::new();
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }
        if let Some(data_provider) = data_provider {
            query.push(("dataProvider", data_provider.to_string()));
        }

        let path = format!("/api/v1/Currencies/{source_currency}/{destination_currency}");
        let endpoint = with_query(&path, &query);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Convert an array of date/currency pairs into rates against a single
    /// destination currency.
    ///
    /// POST /api/v1/Currencies/bulk?destinationCurrency={destinationCurrency}
    pub async fn bulk_currency_data(
        &self,
        destination_currency: Option<&str>,
        body: &[BulkCurrencyConversionModel],
    ) -> Result<Vec<CurrencyRateModel>> {
        let mut query = Vec::new();
        if let Some(destination_currency) = destination_currency {
            query.push(("destinationCurrency", destination_currency.to_string()));
        }

        let endpoint = with_query("/api/v1/Currencies/bulk", &query);
        let builder = self.api_request(Method::POST, &endpoint)?.json(&body);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, LockstepClient};
    use crate::types::{BulkCurrencyConversionModel, CurrencyRateModel};
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> LockstepClient {
        LockstepClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_retrieve_currency_rate() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "sourceCurrency": "EUR",
            "destinationCurrency": "USD",
            "date": "2022-01-15",
            "currencyRate": 1.125
        }"#;

        Mock::given(method("GET"))
            .and(path("/api/v1/Currencies/EUR/USD"))
            .and(query_param("date", "2022-01-15"))
            .and(query_param("dataProvider", "ECB"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let rate = test_client(&server)
            .retrieve_currency_rate(
                "EUR",
                "USD",
                Some("2022-01-15".parse().expect("date")),
                Some("ECB"),
            )
            .await
            .expect("retrieve_currency_rate failed");

        let expected = CurrencyRateModel {
            source_currency: Some("EUR".to_string()),
            destination_currency: Some("USD".to_string()),
            date: Some("2022-01-15".parse().expect("date")),
            currency_rate: Some("1.125".parse().expect("rate")),
        };
        assert_eq!(rate, expected);
    }

    #[tokio::test]
    async fn test_retrieve_currency_rate_omits_unset_options() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/Currencies/GBP/USD"))
            .and(query_param_is_missing("date"))
            .and(query_param_is_missing("dataProvider"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let rate = test_client(&server)
            .retrieve_currency_rate("GBP", "USD", None, None)
            .await
            .expect("retrieve_currency_rate failed");
        assert_eq!(rate.currency_rate, None);
    }

    #[tokio::test]
    async fn test_bulk_currency_data() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {
                "sourceCurrency": "EUR",
                "destinationCurrency": "USD",
                "date": "2022-01-15",
                "currencyRate": 1.125
            },
            {
                "sourceCurrency": "GBP",
                "destinationCurrency": "USD",
                "date": "2022-02-01",
                "currencyRate": 1.25
            }
        ]"#;

        Mock::given(method("POST"))
            .and(path("/api/v1/Currencies/bulk"))
            .and(query_param("destinationCurrency", "USD"))
            .and(body_json(serde_json::json!([
                {"date": "2022-01-15", "sourceCurrency": "EUR"},
                {"date": "2022-02-01", "sourceCurrency": "GBP"}
            ])))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let body = vec![
            BulkCurrencyConversionModel {
                date: "2022-01-15".parse().expect("date"),
                source_currency: "EUR".to_string(),
            },
            BulkCurrencyConversionModel {
                date: "2022-02-01".parse().expect("date"),
                source_currency: "GBP".to_string(),
            },
        ];

        let rates = test_client(&server)
            .bulk_currency_data(Some("USD"), &body)
            .await
            .expect("bulk_currency_data failed");

        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].source_currency.as_deref(), Some("EUR"));
        assert_eq!(rates[1].currency_rate, Some("1.25".parse().expect("rate")));
    }
}
