/*
[INPUT]:  Endpoint parameter sets and serde requirements
[OUTPUT]: Typed request bodies and query parameter structs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When endpoint parameters change or new requests are added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{
    ChildOrderType, ConditionType, OrderState, ParentOrderMethod, Side, TimeInForce,
};

pub const DEFAULT_PRODUCT_CODE: &str = "BTC_JPY";
pub const DEFAULT_FX_PRODUCT_CODE: &str = "FX_BTC_JPY";
pub const DEFAULT_CURRENCY_CODE: &str = "JPY";
pub const DEFAULT_COUNT: u32 = 100;
/// 30 days, the exchange maximum
pub const DEFAULT_MINUTE_TO_EXPIRE: u32 = 43_200;

/// `count` / `before` / `after` paging shared by the history endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT)
    }
}

impl Pagination {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            before: None,
            after: None,
        }
    }

    /// Only return records with an id lower than `id`
    pub fn before(mut self, id: u64) -> Self {
        self.before = Some(id);
        self
    }

    /// Only return records with an id greater than `id`
    pub fn after(mut self, id: u64) -> Self {
        self.after = Some(id);
        self
    }
}

/// Identifies an order either by exchange id or by acceptance id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRef {
    Id(String),
    AcceptanceId(String),
}

impl OrderRef {
    pub fn id(id: impl Into<String>) -> Self {
        OrderRef::Id(id.into())
    }

    pub fn acceptance_id(id: impl Into<String>) -> Self {
        OrderRef::AcceptanceId(id.into())
    }

    /// Parameter name and value when referring to a child order
    pub fn child_field(&self) -> (&'static str, &str) {
        match self {
            OrderRef::Id(id) => ("child_order_id", id),
            OrderRef::AcceptanceId(id) => ("child_order_acceptance_id", id),
        }
    }

    /// Parameter name and value when referring to a parent order
    pub fn parent_field(&self) -> (&'static str, &str) {
        match self {
            OrderRef::Id(id) => ("parent_order_id", id),
            OrderRef::AcceptanceId(id) => ("parent_order_acceptance_id", id),
        }
    }
}

/// Body of POST /v1/me/sendchildorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChildOrder {
    pub product_code: String,
    pub child_order_type: ChildOrderType,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    pub minute_to_expire: u32,
    pub time_in_force: TimeInForce,
}

impl NewChildOrder {
    pub fn limit(product_code: impl Into<String>, side: Side, price: Decimal, size: Decimal) -> Self {
        Self {
            product_code: product_code.into(),
            child_order_type: ChildOrderType::Limit,
            side,
            price: Some(price),
            size,
            minute_to_expire: DEFAULT_MINUTE_TO_EXPIRE,
            time_in_force: TimeInForce::Gtc,
        }
    }

    pub fn market(product_code: impl Into<String>, side: Side, size: Decimal) -> Self {
        Self {
            product_code: product_code.into(),
            child_order_type: ChildOrderType::Market,
            side,
            price: None,
            size,
            minute_to_expire: DEFAULT_MINUTE_TO_EXPIRE,
            time_in_force: TimeInForce::Gtc,
        }
    }

    pub fn with_minute_to_expire(mut self, minutes: u32) -> Self {
        self.minute_to_expire = minutes;
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }
}

/// One leg of a special order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentOrderParameter {
    pub product_code: String,
    pub condition_type: ConditionType,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Decimal>,
}

impl ParentOrderParameter {
    fn leg(
        product_code: impl Into<String>,
        condition_type: ConditionType,
        side: Side,
        size: Decimal,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            condition_type,
            side,
            size,
            price: None,
            trigger_price: None,
            offset: None,
        }
    }

    pub fn limit(product_code: impl Into<String>, side: Side, price: Decimal, size: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Self::leg(product_code, ConditionType::Limit, side, size)
        }
    }

    pub fn market(product_code: impl Into<String>, side: Side, size: Decimal) -> Self {
        Self::leg(product_code, ConditionType::Market, side, size)
    }

    pub fn stop(product_code: impl Into<String>, side: Side, trigger_price: Decimal, size: Decimal) -> Self {
        Self {
            trigger_price: Some(trigger_price),
            ..Self::leg(product_code, ConditionType::Stop, side, size)
        }
    }

    pub fn stop_limit(
        product_code: impl Into<String>,
        side: Side,
        trigger_price: Decimal,
        price: Decimal,
        size: Decimal,
    ) -> Self {
        Self {
            price: Some(price),
            trigger_price: Some(trigger_price),
            ..Self::leg(product_code, ConditionType::StopLimit, side, size)
        }
    }

    pub fn trail(product_code: impl Into<String>, side: Side, offset: Decimal, size: Decimal) -> Self {
        Self {
            offset: Some(offset),
            ..Self::leg(product_code, ConditionType::Trail, side, size)
        }
    }
}

/// Body of POST /v1/me/sendparentorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewParentOrder {
    pub order_method: ParentOrderMethod,
    pub minute_to_expire: u32,
    pub time_in_force: TimeInForce,
    pub parameters: Vec<ParentOrderParameter>,
}

impl NewParentOrder {
    pub fn new(order_method: ParentOrderMethod, parameters: Vec<ParentOrderParameter>) -> Self {
        Self {
            order_method,
            minute_to_expire: DEFAULT_MINUTE_TO_EXPIRE,
            time_in_force: TimeInForce::Gtc,
            parameters,
        }
    }

    /// A SIMPLE order with a single leg
    pub fn simple(parameter: ParentOrderParameter) -> Self {
        Self::new(ParentOrderMethod::Simple, vec![parameter])
    }

    pub fn with_minute_to_expire(mut self, minutes: u32) -> Self {
        self.minute_to_expire = minutes;
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }
}

/// Query of GET /v1/me/getchildorders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildOrdersQuery {
    pub product_code: String,
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_order_state: Option<OrderState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_order_acceptance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_order_id: Option<String>,
}

impl Default for ChildOrdersQuery {
    fn default() -> Self {
        Self::for_product(DEFAULT_PRODUCT_CODE)
    }
}

impl ChildOrdersQuery {
    pub fn for_product(product_code: impl Into<String>) -> Self {
        Self {
            product_code: product_code.into(),
            pagination: Pagination::default(),
            child_order_state: None,
            child_order_id: None,
            child_order_acceptance_id: None,
            parent_order_id: None,
        }
    }
}

/// Query of GET /v1/me/getparentorders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentOrdersQuery {
    pub product_code: String,
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_order_state: Option<OrderState>,
}

impl Default for ParentOrdersQuery {
    fn default() -> Self {
        Self::for_product(DEFAULT_PRODUCT_CODE)
    }
}

impl ParentOrdersQuery {
    pub fn for_product(product_code: impl Into<String>) -> Self {
        Self {
            product_code: product_code.into(),
            pagination: Pagination::default(),
            parent_order_state: None,
        }
    }
}

/// Query of GET /v1/me/getexecutions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyExecutionsQuery {
    pub product_code: String,
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_order_acceptance_id: Option<String>,
}

impl Default for MyExecutionsQuery {
    fn default() -> Self {
        Self::for_product(DEFAULT_PRODUCT_CODE)
    }
}

impl MyExecutionsQuery {
    pub fn for_product(product_code: impl Into<String>) -> Self {
        Self {
            product_code: product_code.into(),
            pagination: Pagination::default(),
            child_order_id: None,
            child_order_acceptance_id: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductQuery<'a> {
    pub product_code: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExecutionsQuery<'a> {
    pub product_code: &'a str,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatsQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BalanceHistoryQuery<'a> {
    pub currency_code: &'a str,
    #[serde(flatten)]
    pub pagination: Pagination,
}
