//! Insolvency risk analysis (mocked)
//!
//! The report is canned: every company scores 42/100 with the same factor
//! breakdown and commodity prices. Only the shape and the latency contract
//! matter until a real modeling backend replaces this.

use serde::Serialize;

/// Severity of one financial indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Good,
    Warning,
    Critical,
}

/// Overall risk banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub name: &'static str,
    pub value: &'static str,
    pub status: FactorStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityPrice {
    pub commodity: &'static str,
    pub price: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub commodity_prices: Vec<CommodityPrice>,
    pub recommendation: &'static str,
}

/// Build the canned risk report for `company`.
pub fn assess(company: &str) -> RiskReport {
    tracing::debug!(company, "building insolvency risk report");
    RiskReport {
        risk_score: 42,
        risk_level: RiskLevel::Medium,
        factors: vec![
            RiskFactor {
                name: "Debt-to-Equity Ratio",
                value: "2.3",
                status: FactorStatus::Warning,
            },
            RiskFactor {
                name: "Current Ratio",
                value: "1.2",
                status: FactorStatus::Good,
            },
            RiskFactor {
                name: "Cash Flow",
                value: "-$2.4M",
                status: FactorStatus::Critical,
            },
            RiskFactor {
                name: "Revenue Growth",
                value: "-8%",
                status: FactorStatus::Warning,
            },
        ],
        commodity_prices: vec![
            CommodityPrice {
                commodity: "Corn",
                price: "$4.85/bu",
                change: "+2.3%",
            },
            CommodityPrice {
                commodity: "Soybeans",
                price: "$12.40/bu",
                change: "-1.2%",
            },
            CommodityPrice {
                commodity: "Wheat",
                price: "$6.20/bu",
                change: "+0.8%",
            },
        ],
        recommendation: "Monitor closely. Consider debt restructuring and diversification strategies.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_constants() {
        let report = assess("Midwest Grain Co.");
        assert_eq!(report.risk_score, 42);
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert_eq!(report.factors.len(), 4);
        assert_eq!(report.commodity_prices.len(), 3);
        assert_eq!(report.factors[2].status, FactorStatus::Critical);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(assess("any")).unwrap();
        assert_eq!(json["riskScore"], 42);
        assert_eq!(json["riskLevel"], "Medium");
        assert_eq!(json["factors"][0]["status"], "warning");
        assert_eq!(json["commodityPrices"][0]["commodity"], "Corn");
    }
}
