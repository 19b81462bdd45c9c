/*
[INPUT]:  API parameter vocabularies and serde requirements
[OUTPUT]: Typed Rust enums with wire-name serialization
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API vocabularies change or new enums are added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Implements `as_str`, `Display` and case-insensitive `FromStr` from one wire-name table.
macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let upper = s.to_ascii_uppercase();
                match upper.as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(format!("unknown {} '{}'", stringify!($name), s)),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

wire_enum!(Side { Buy => "BUY", Sell => "SELL" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChildOrderType {
    Limit,
    Market,
}

wire_enum!(ChildOrderType { Limit => "LIMIT", Market => "MARKET" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    #[default]
    Gtc,
    Ioc,
    Fok,
}

wire_enum!(TimeInForce { Gtc => "GTC", Ioc => "IOC", Fok => "FOK" });

/// State filter for child and parent order listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderState {
    Active,
    Completed,
    Canceled,
    Expired,
    Rejected,
}

wire_enum!(OrderState {
    Active => "ACTIVE",
    Completed => "COMPLETED",
    Canceled => "CANCELED",
    Expired => "EXPIRED",
    Rejected => "REJECTED",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParentOrderMethod {
    #[default]
    Simple,
    Ifd,
    Oco,
    Ifdoco,
}

wire_enum!(ParentOrderMethod {
    Simple => "SIMPLE",
    Ifd => "IFD",
    Oco => "OCO",
    Ifdoco => "IFDOCO",
});

/// Execution condition of one leg of a parent order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    Limit,
    Market,
    Stop,
    StopLimit,
    Trail,
}

wire_enum!(ConditionType {
    Limit => "LIMIT",
    Market => "MARKET",
    Stop => "STOP",
    StopLimit => "STOP_LIMIT",
    Trail => "TRAIL",
});
