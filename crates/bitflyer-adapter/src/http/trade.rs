/*
[INPUT]:  Order requests, order references, listing filters
[OUTPUT]: Order acceptance JSON, cancel confirmation, order/execution listings
[POS]:    HTTP layer - trading endpoints (require API key + signed body)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::{Map, Value};

use crate::http::client::query_pairs;
use crate::http::{BitflyerClient, Result};
use crate::types::requests::ProductQuery;
use crate::types::{
    ChildOrdersQuery, MyExecutionsQuery, NewChildOrder, NewParentOrder, OrderRef,
    ParentOrdersQuery,
};

/// `{"product_code": ..., <field>: <id>}` body shared by the cancel endpoints
fn cancel_body(product_code: &str, (field, id): (&str, &str)) -> Value {
    let mut body = Map::new();
    body.insert("product_code".to_string(), Value::from(product_code));
    body.insert(field.to_string(), Value::from(id));
    Value::Object(body)
}

impl BitflyerClient {
    /// Place a limit or market order
    ///
    /// POST /v1/me/sendchildorder
    pub async fn send_child_order(&self, order: &NewChildOrder) -> Result<Value> {
        self.private_post("/v1/me/sendchildorder", order).await
    }

    /// Cancel one child order; `true` once the exchange accepted the cancel
    ///
    /// POST /v1/me/cancelchildorder
    pub async fn cancel_child_order(&self, product_code: &str, order: &OrderRef) -> Result<bool> {
        let body = cancel_body(product_code, order.child_field());
        self.private_post_ack("/v1/me/cancelchildorder", &body).await
    }

    /// Place a special (conditional) order
    ///
    /// POST /v1/me/sendparentorder
    pub async fn send_parent_order(&self, order: &NewParentOrder) -> Result<Value> {
        self.private_post("/v1/me/sendparentorder", order).await
    }

    /// Cancel one parent order
    ///
    /// POST /v1/me/cancelparentorder
    pub async fn cancel_parent_order(&self, product_code: &str, order: &OrderRef) -> Result<bool> {
        let body = cancel_body(product_code, order.parent_field());
        self.private_post_ack("/v1/me/cancelparentorder", &body).await
    }

    /// Cancel every open child order of a product
    ///
    /// POST /v1/me/cancelallchildorders
    pub async fn cancel_all_child_orders(&self, product_code: &str) -> Result<bool> {
        self.private_post_ack("/v1/me/cancelallchildorders", &ProductQuery { product_code })
            .await
    }

    /// List child orders
    ///
    /// GET /v1/me/getchildorders
    pub async fn get_child_orders(&self, query: &ChildOrdersQuery) -> Result<Value> {
        let query = query_pairs(query)?;
        self.private_get("/v1/me/getchildorders", &query).await
    }

    /// List parent orders
    ///
    /// GET /v1/me/getparentorders
    pub async fn get_parent_orders(&self, query: &ParentOrdersQuery) -> Result<Value> {
        let query = query_pairs(query)?;
        self.private_get("/v1/me/getparentorders", &query).await
    }

    /// Details of one parent order, including its legs
    ///
    /// GET /v1/me/getparentorder?parent_order_id={id} | ?parent_order_acceptance_id={id}
    pub async fn get_parent_order(&self, order: &OrderRef) -> Result<Value> {
        let (field, id) = order.parent_field();
        let query = vec![(field.to_string(), id.to_string())];
        self.private_get("/v1/me/getparentorder", &query).await
    }

    /// Own execution history
    ///
    /// GET /v1/me/getexecutions
    pub async fn get_my_executions(&self, query: &MyExecutionsQuery) -> Result<Value> {
        let query = query_pairs(query)?;
        self.private_get("/v1/me/getexecutions", &query).await
    }
}
