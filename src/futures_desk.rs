//! Futures desk: market board and contract book
//!
//! The market board is a static four-commodity table resolved through the
//! desk's simulated instance. Contract creation is the one synchronous
//! domain action: it appends to an in-memory ordered book, assigns the next
//! sequential id, and prices off the board's futures column. Contracts are
//! never updated, settled, or deleted; the book resets on restart.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::errors::{OrpheusError, OrpheusResult};

/// Contract id prefix. The year is literal: the demo's ledger and its seed
/// data are pinned to the 2024 contract series.
pub const CONTRACT_ID_PREFIX: &str = "FC-2024";
/// Expiry assigned to every newly opened contract.
pub const CONTRACT_EXPIRY: &str = "Dec 2024";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuote {
    pub commodity: &'static str,
    pub spot: &'static str,
    pub futures: &'static str,
    pub change: &'static str,
}

lazy_static! {
    /// Spot and futures prices for the four tradable commodities.
    pub static ref MARKET_BOARD: Vec<MarketQuote> = vec![
        MarketQuote { commodity: "Corn", spot: "$4.85", futures: "$4.92", change: "+1.4%" },
        MarketQuote { commodity: "Soybeans", spot: "$12.40", futures: "$12.55", change: "-0.8%" },
        MarketQuote { commodity: "Wheat", spot: "$6.20", futures: "$6.28", change: "+2.1%" },
        MarketQuote { commodity: "Cotton", spot: "$0.82", futures: "$0.84", change: "+0.5%" },
    ];
}

/// Futures price for `commodity`, if it trades on the board.
pub fn futures_price(commodity: &str) -> Option<&'static str> {
    MARKET_BOARD
        .iter()
        .find(|quote| quote.commodity == commodity)
        .map(|quote| quote.futures)
}

/// Futures price times quantity, zero when either side does not parse.
pub fn estimated_contract_value(commodity: &str, quantity: &str) -> f64 {
    let price = futures_price(commodity)
        .and_then(|p| p.trim_start_matches('$').parse::<f64>().ok())
        .unwrap_or(0.0);
    let quantity = quantity.parse::<f64>().unwrap_or(0.0);
    price * quantity
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContractStatus {
    Pending,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesContract {
    pub id: String,
    pub commodity: String,
    pub quantity: String,
    pub price: String,
    pub expiry: String,
    pub status: ContractStatus,
    pub pnl: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRequest {
    pub commodity: String,
    pub quantity: String,
    pub contract_type: ContractSide,
}

/// In-memory ordered list of futures contracts.
pub struct ContractBook {
    contracts: Vec<FuturesContract>,
}

impl ContractBook {
    /// Empty book.
    pub fn new() -> Self {
        Self {
            contracts: Vec::new(),
        }
    }

    /// Book seeded with the demo's two active positions.
    pub fn seeded() -> Self {
        Self {
            contracts: vec![
                FuturesContract {
                    id: format!("{CONTRACT_ID_PREFIX}-001"),
                    commodity: "Corn".to_string(),
                    quantity: "5,000 bu".to_string(),
                    price: "$4.85/bu".to_string(),
                    expiry: "Dec 2024".to_string(),
                    status: ContractStatus::Active,
                    pnl: "+$2,450".to_string(),
                },
                FuturesContract {
                    id: format!("{CONTRACT_ID_PREFIX}-002"),
                    commodity: "Soybeans".to_string(),
                    quantity: "2,000 bu".to_string(),
                    price: "$12.40/bu".to_string(),
                    expiry: "Nov 2024".to_string(),
                    status: ContractStatus::Active,
                    pnl: "-$890".to_string(),
                },
            ],
        }
    }

    pub fn contracts(&self) -> &[FuturesContract] {
        &self.contracts
    }

    /// Append a new contract. Contracts are never removed, so length + 1 is
    /// always the next unused sequence number.
    pub fn open(&mut self, request: &ContractRequest) -> OrpheusResult<FuturesContract> {
        if request.commodity.trim().is_empty() {
            return Err(OrpheusError::validation(
                "commodity",
                "commodity is required",
            ));
        }
        if request.quantity.trim().is_empty() {
            return Err(OrpheusError::validation("quantity", "quantity is required"));
        }

        let contract = FuturesContract {
            id: format!("{CONTRACT_ID_PREFIX}-{:03}", self.contracts.len() + 1),
            commodity: request.commodity.clone(),
            quantity: format!("{} bu", request.quantity),
            price: futures_price(&request.commodity)
                .unwrap_or("$0.00")
                .to_string(),
            expiry: CONTRACT_EXPIRY.to_string(),
            status: ContractStatus::Pending,
            pnl: "$0".to_string(),
        };
        self.contracts.push(contract.clone());
        Ok(contract)
    }
}

impl Default for ContractBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corn_request() -> ContractRequest {
        ContractRequest {
            commodity: "Corn".into(),
            quantity: "5000".into(),
            contract_type: ContractSide::Buy,
        }
    }

    #[test]
    fn test_seeded_book() {
        let book = ContractBook::seeded();
        assert_eq!(book.contracts().len(), 2);
        assert_eq!(book.contracts()[0].id, "FC-2024-001");
        assert_eq!(book.contracts()[1].id, "FC-2024-002");
        assert!(book
            .contracts()
            .iter()
            .all(|c| c.status == ContractStatus::Active));
    }

    #[test]
    fn test_open_assigns_next_sequence_and_defaults() {
        let mut book = ContractBook::seeded();
        let contract = book.open(&corn_request()).unwrap();

        assert_eq!(contract.id, "FC-2024-003");
        assert_eq!(contract.quantity, "5000 bu");
        assert_eq!(contract.price, "$4.92");
        assert_eq!(contract.status, ContractStatus::Pending);
        assert_eq!(contract.pnl, "$0");
        assert_eq!(contract.expiry, CONTRACT_EXPIRY);
        assert_eq!(book.contracts().len(), 3);
    }

    #[test]
    fn test_sequence_is_zero_padded() {
        let mut book = ContractBook::new();
        for _ in 0..11 {
            book.open(&corn_request()).unwrap();
        }
        assert_eq!(book.contracts()[0].id, "FC-2024-001");
        assert_eq!(book.contracts()[9].id, "FC-2024-010");
        assert_eq!(book.contracts()[10].id, "FC-2024-011");
    }

    #[test]
    fn test_unknown_commodity_prices_at_zero() {
        let mut book = ContractBook::new();
        let contract = book
            .open(&ContractRequest {
                commodity: "Barley".into(),
                quantity: "100".into(),
                contract_type: ContractSide::Sell,
            })
            .unwrap();
        assert_eq!(contract.price, "$0.00");
    }

    #[test]
    fn test_open_rejects_blank_fields() {
        let mut book = ContractBook::seeded();
        let err = book
            .open(&ContractRequest {
                commodity: "  ".into(),
                quantity: "5000".into(),
                contract_type: ContractSide::Buy,
            })
            .unwrap_err();
        assert!(matches!(err, OrpheusError::Validation { .. }));
        assert_eq!(book.contracts().len(), 2);
    }

    #[test]
    fn test_estimated_contract_value() {
        assert_eq!(estimated_contract_value("Corn", "5000"), 4.92 * 5000.0);
        assert_eq!(estimated_contract_value("Barley", "5000"), 0.0);
        assert_eq!(estimated_contract_value("Corn", "not-a-number"), 0.0);
    }

    #[test]
    fn test_market_board_shape() {
        assert_eq!(MARKET_BOARD.len(), 4);
        assert_eq!(futures_price("Wheat"), Some("$6.28"));
        assert_eq!(futures_price("Rice"), None);
    }
}
