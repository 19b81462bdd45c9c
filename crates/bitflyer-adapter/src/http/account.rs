/*
[INPUT]:  Query parameters and signed ACCESS-* headers
[OUTPUT]: Account data JSON (permissions, balances, collateral, funding history)
[POS]:    HTTP layer - private account endpoints (require API key)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::client::query_pairs;
use crate::http::{BitflyerClient, Result};
use crate::types::Pagination;
use crate::types::requests::{BalanceHistoryQuery, ProductQuery};

impl BitflyerClient {
    /// Endpoints this API key may call
    ///
    /// GET /v1/me/getpermissions
    pub async fn get_permissions(&self) -> Result<Value> {
        self.private_get("/v1/me/getpermissions", &[]).await
    }

    /// Asset balances
    ///
    /// GET /v1/me/getbalance
    pub async fn get_balance(&self) -> Result<Value> {
        self.private_get("/v1/me/getbalance", &[]).await
    }

    /// Margin status
    ///
    /// GET /v1/me/getcollateral
    pub async fn get_collateral(&self) -> Result<Value> {
        self.private_get("/v1/me/getcollateral", &[]).await
    }

    /// Crypto deposit addresses
    ///
    /// GET /v1/me/getaddresses
    pub async fn get_addresses(&self) -> Result<Value> {
        self.private_get("/v1/me/getaddresses", &[]).await
    }

    /// Crypto deposit history
    ///
    /// GET /v1/me/getcoinins
    pub async fn get_coin_ins(&self) -> Result<Value> {
        self.private_get("/v1/me/getcoinins", &[]).await
    }

    /// Crypto transfer history
    ///
    /// GET /v1/me/getcoinouts
    pub async fn get_coin_outs(&self) -> Result<Value> {
        self.private_get("/v1/me/getcoinouts", &[]).await
    }

    /// Registered bank accounts
    ///
    /// GET /v1/me/getbankaccounts
    pub async fn get_bank_accounts(&self) -> Result<Value> {
        self.private_get("/v1/me/getbankaccounts", &[]).await
    }

    /// Cash deposit history
    ///
    /// GET /v1/me/getdeposits
    pub async fn get_deposits(&self) -> Result<Value> {
        self.private_get("/v1/me/getdeposits", &[]).await
    }

    /// Cash withdrawal history
    ///
    /// GET /v1/me/getwithdrawals
    pub async fn get_withdrawals(&self) -> Result<Value> {
        self.private_get("/v1/me/getwithdrawals", &[]).await
    }

    /// Balance history for one currency
    ///
    /// GET /v1/me/getbalancehistory?currency_code={currency_code}&count={count}[&before][&after]
    pub async fn get_balance_history(
        &self,
        currency_code: &str,
        pagination: Pagination,
    ) -> Result<Value> {
        let query = query_pairs(&BalanceHistoryQuery {
            currency_code,
            pagination,
        })?;
        self.private_get("/v1/me/getbalancehistory", &query).await
    }

    /// Open positions (FX / futures products)
    ///
    /// GET /v1/me/getpositions?product_code={product_code}
    pub async fn get_positions(&self, product_code: &str) -> Result<Value> {
        let query = query_pairs(&ProductQuery { product_code })?;
        self.private_get("/v1/me/getpositions", &query).await
    }

    /// Margin deposit / withdrawal history
    ///
    /// GET /v1/me/getcollateralhistory?count={count}[&before][&after]
    pub async fn get_collateral_history(&self, pagination: Pagination) -> Result<Value> {
        let query = query_pairs(&pagination)?;
        self.private_get("/v1/me/getcollateralhistory", &query).await
    }

    /// Trading commission rate for a product
    ///
    /// GET /v1/me/gettradingcommission?product_code={product_code}
    pub async fn get_trading_commission(&self, product_code: &str) -> Result<Value> {
        let query = query_pairs(&ProductQuery { product_code })?;
        self.private_get("/v1/me/gettradingcommission", &query).await
    }
}
