/*
[INPUT]:  Parsed subcommand and configured API client
[OUTPUT]: JSON value to print for the invoked endpoint
[POS]:    Command layer - maps CLI subcommands onto client calls
[UPDATE]: When adding subcommands or client endpoints
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use bitflyer_adapter::{
    BitflyerClient, ChildOrdersQuery, DEFAULT_COUNT, DEFAULT_FX_PRODUCT_CODE,
    DEFAULT_MINUTE_TO_EXPIRE, DEFAULT_PRODUCT_CODE, NewChildOrder, OrderRef, OrderState,
    Pagination, Side, TimeInForce,
};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List markets
    Markets,
    /// Order book of a product
    Board { product_code: String },
    /// Ticker of a product
    Ticker { product_code: String },
    /// Public execution history
    Executions {
        product_code: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Chat log
    Chats {
        #[arg(long = "from-date", value_name = "DATE")]
        from_date: Option<String>,
    },
    /// API key permissions
    Permissions,
    /// Asset balances
    Balance,
    /// Margin status
    Collateral,
    /// Open positions
    Positions {
        #[arg(default_value = DEFAULT_FX_PRODUCT_CODE)]
        product_code: String,
    },
    /// List child orders
    ChildOrders {
        #[arg(default_value = DEFAULT_PRODUCT_CODE)]
        product_code: String,
        #[arg(long, value_name = "STATE")]
        state: Option<OrderState>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Place a buy order (limit when --price is given, market otherwise)
    Buy(OrderArgs),
    /// Place a sell order (limit when --price is given, market otherwise)
    Sell(OrderArgs),
    /// Cancel one child order
    Cancel {
        product_code: String,
        #[command(flatten)]
        target: OrderTarget,
    },
    /// Cancel all child orders of a product
    CancelAll { product_code: String },
    /// Write a configuration template
    Init {
        #[arg(long, value_name = "PATH", default_value = "bitflyer.yaml")]
        output: PathBuf,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PageArgs {
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,
    #[arg(long)]
    pub before: Option<u64>,
    #[arg(long)]
    pub after: Option<u64>,
}

impl PageArgs {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            count: self.count,
            before: self.before,
            after: self.after,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct OrderArgs {
    pub product_code: String,
    pub size: Decimal,
    #[arg(long)]
    pub price: Option<Decimal>,
    #[arg(long = "tif", default_value = "GTC")]
    pub time_in_force: TimeInForce,
    #[arg(long = "expire-minutes", default_value_t = DEFAULT_MINUTE_TO_EXPIRE)]
    pub minute_to_expire: u32,
}

impl OrderArgs {
    pub fn order(&self, side: Side) -> NewChildOrder {
        let order = match self.price {
            Some(price) => NewChildOrder::limit(&self.product_code, side, price, self.size),
            None => NewChildOrder::market(&self.product_code, side, self.size),
        };
        order
            .with_time_in_force(self.time_in_force)
            .with_minute_to_expire(self.minute_to_expire)
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct OrderTarget {
    #[arg(long = "order-id")]
    pub order_id: Option<String>,
    #[arg(long = "acceptance-id")]
    pub acceptance_id: Option<String>,
}

impl OrderTarget {
    pub fn order_ref(&self) -> Option<OrderRef> {
        match (&self.order_id, &self.acceptance_id) {
            (Some(id), _) => Some(OrderRef::id(id)),
            (None, Some(id)) => Some(OrderRef::acceptance_id(id)),
            (None, None) => None,
        }
    }
}

/// Run one API subcommand and return the JSON to print
pub async fn execute(client: &BitflyerClient, command: &Command) -> Result<Value> {
    let value = match command {
        Command::Markets => client.get_markets().await?,
        Command::Board { product_code } => client.get_board(product_code).await?,
        Command::Ticker { product_code } => client.get_ticker(product_code).await?,
        Command::Executions { product_code, page } => {
            client.get_executions(product_code, page.pagination()).await?
        }
        Command::Chats { from_date } => client.get_chats(from_date.as_deref()).await?,
        Command::Permissions => client.get_permissions().await?,
        Command::Balance => client.get_balance().await?,
        Command::Collateral => client.get_collateral().await?,
        Command::Positions { product_code } => client.get_positions(product_code).await?,
        Command::ChildOrders {
            product_code,
            state,
            page,
        } => {
            let query = ChildOrdersQuery {
                pagination: page.pagination(),
                child_order_state: *state,
                ..ChildOrdersQuery::for_product(product_code)
            };
            client.get_child_orders(&query).await?
        }
        Command::Buy(args) => send_order(client, args, Side::Buy).await?,
        Command::Sell(args) => send_order(client, args, Side::Sell).await?,
        Command::Cancel {
            product_code,
            target,
        } => {
            let order = target
                .order_ref()
                .ok_or_else(|| anyhow!("either --order-id or --acceptance-id is required"))?;
            let cancelled = client
                .cancel_child_order(product_code, &order)
                .await
                .context("cancel child order")?;
            json!({ "cancelled": cancelled })
        }
        Command::CancelAll { product_code } => {
            let cancelled = client
                .cancel_all_child_orders(product_code)
                .await
                .context("cancel all child orders")?;
            json!({ "cancelled": cancelled })
        }
        Command::Init { .. } => {
            return Err(anyhow!("init does not call the API"));
        }
    };
    Ok(value)
}

async fn send_order(client: &BitflyerClient, args: &OrderArgs, side: Side) -> Result<Value> {
    let order = args.order(side);
    info!(
        product_code = %order.product_code,
        side = %side,
        size = %order.size,
        order_type = %order.child_order_type,
        "sending child order"
    );
    client
        .send_child_order(&order)
        .await
        .context("send child order")
}
