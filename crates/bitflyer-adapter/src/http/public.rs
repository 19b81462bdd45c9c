/*
[INPUT]:  Product codes and query parameters
[OUTPUT]: Market data JSON (markets, board, ticker, executions, chats)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::client::query_pairs;
use crate::http::{BitflyerClient, Result};
use crate::types::Pagination;
use crate::types::requests::{ChatsQuery, ExecutionsQuery, ProductQuery};

impl BitflyerClient {
    /// List markets
    ///
    /// GET /v1/getmarkets
    pub async fn get_markets(&self) -> Result<Value> {
        self.public_get("/v1/getmarkets", &[]).await
    }

    /// Order book
    ///
    /// GET /v1/getboard?product_code={product_code}
    pub async fn get_board(&self, product_code: &str) -> Result<Value> {
        let query = query_pairs(&ProductQuery { product_code })?;
        self.public_get("/v1/getboard", &query).await
    }

    /// Ticker
    ///
    /// GET /v1/ticker?product_code={product_code}
    pub async fn get_ticker(&self, product_code: &str) -> Result<Value> {
        let query = query_pairs(&ProductQuery { product_code })?;
        self.public_get("/v1/ticker", &query).await
    }

    /// Public execution history
    ///
    /// GET /v1/getexecutions?product_code={product_code}&count={count}[&before][&after]
    pub async fn get_executions(
        &self,
        product_code: &str,
        pagination: Pagination,
    ) -> Result<Value> {
        let query = query_pairs(&ExecutionsQuery {
            product_code,
            pagination,
        })?;
        self.public_get("/v1/getexecutions", &query).await
    }

    /// Board state (NORMAL, BUSY, ... and whether the market is running)
    ///
    /// GET /v1/getboardstate?product_code={product_code}
    pub async fn get_board_state(&self, product_code: &str) -> Result<Value> {
        let query = query_pairs(&ProductQuery { product_code })?;
        self.public_get("/v1/getboardstate", &query).await
    }

    /// Exchange health
    ///
    /// GET /v1/gethealth?product_code={product_code}
    pub async fn get_health(&self, product_code: &str) -> Result<Value> {
        let query = query_pairs(&ProductQuery { product_code })?;
        self.public_get("/v1/gethealth", &query).await
    }

    /// Chat log, optionally starting at `from_date`
    ///
    /// GET /v1/getchats[?from_date={from_date}]
    pub async fn get_chats(&self, from_date: Option<&str>) -> Result<Value> {
        let query = query_pairs(&ChatsQuery { from_date })?;
        self.public_get("/v1/getchats", &query).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::public_client;
    use crate::types::Pagination;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_markets() {
        let server = MockServer::start().await;
        let mock_response = json!([
            { "product_code": "BTC_JPY", "market_type": "Spot" },
            { "product_code": "FX_BTC_JPY", "market_type": "FX" }
        ]);

        Mock::given(method("GET"))
            .and(path("/v1/getmarkets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_response.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let response = public_client(&server)
            .get_markets()
            .await
            .expect("get_markets failed");

        assert_eq!(response, mock_response);

        let requests = server.received_requests().await.expect("recorded requests");
        assert_eq!(requests[0].url.query(), None);
        assert!(requests[0].headers.get("access-key").is_none());
        assert!(requests[0].headers.get("access-sign").is_none());
    }

    #[tokio::test]
    async fn test_get_board() {
        let server = MockServer::start().await;
        let mock_response = json!({
            "mid_price": 33320,
            "bids": [{ "price": 30000, "size": 0.1 }],
            "asks": [{ "price": 36640, "size": 5 }]
        });

        Mock::given(method("GET"))
            .and(path("/v1/getboard"))
            .and(query_param("product_code", "BTC_JPY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_response.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let response = public_client(&server)
            .get_board("BTC_JPY")
            .await
            .expect("get_board failed");

        assert_eq!(response, mock_response);
    }

    #[tokio::test]
    async fn test_get_ticker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/ticker"))
            .and(query_param("product_code", "ETH_JPY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "product_code": "ETH_JPY",
                "ltp": 301000.0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = public_client(&server)
            .get_ticker("ETH_JPY")
            .await
            .expect("get_ticker failed");

        assert_eq!(response["ltp"], 301000.0);
    }

    #[tokio::test]
    async fn test_get_executions_omits_unset_bounds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/getexecutions"))
            .and(query_param("product_code", "BTC_JPY"))
            .and(query_param("count", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        public_client(&server)
            .get_executions("BTC_JPY", Pagination::default())
            .await
            .expect("get_executions failed");

        let requests = server.received_requests().await.expect("recorded requests");
        let keys: Vec<String> = requests[0]
            .url
            .query_pairs()
            .map(|(key, _)| key.into_owned())
            .collect();
        assert!(!keys.contains(&"before".to_string()));
        assert!(!keys.contains(&"after".to_string()));
    }

    #[tokio::test]
    async fn test_get_executions_with_bounds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/getexecutions"))
            .and(query_param("product_code", "BTC_JPY"))
            .and(query_param("count", "5"))
            .and(query_param("before", "39287"))
            .and(query_param("after", "39000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 39286 }])))
            .expect(1)
            .mount(&server)
            .await;

        let response = public_client(&server)
            .get_executions("BTC_JPY", Pagination::new(5).before(39287).after(39000))
            .await
            .expect("get_executions failed");

        assert_eq!(response[0]["id"], 39286);
    }

    #[tokio::test]
    async fn test_get_board_state_and_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/getboardstate"))
            .and(query_param("product_code", "FX_BTC_JPY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "health": "NORMAL",
                "state": "RUNNING"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/gethealth"))
            .and(query_param("product_code", "FX_BTC_JPY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "BUSY" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = public_client(&server);
        let state = client.get_board_state("FX_BTC_JPY").await.expect("board state");
        let health = client.get_health("FX_BTC_JPY").await.expect("health");

        assert_eq!(state["state"], "RUNNING");
        assert_eq!(health["status"], "BUSY");
    }

    #[tokio::test]
    async fn test_get_chats_without_from_date() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/getchats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        public_client(&server).get_chats(None).await.expect("get_chats failed");

        let requests = server.received_requests().await.expect("recorded requests");
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_chats_with_from_date() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/getchats"))
            .and(query_param("from_date", "2024-01-01T00:00:00"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "nickname": "satoshi", "message": "hi", "date": "2024-01-01T00:00:01" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let response = public_client(&server)
            .get_chats(Some("2024-01-01T00:00:00"))
            .await
            .expect("get_chats failed");

        assert_eq!(response[0]["nickname"], "satoshi");
    }
}
