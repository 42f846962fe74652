//! Dashboard overview endpoint

use axum::Json;
use serde::Serialize;

use crate::route_guard::CurrentSession;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub trend: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub public_key: Option<String>,
    pub stats: Vec<StatCard>,
    pub nav: Vec<NavEntry>,
}

/// Static overview cards plus the navigation surface. Settings is a nav
/// entry only; no settings operation exists.
pub async fn overview(session: CurrentSession) -> Json<DashboardOverview> {
    Json(DashboardOverview {
        public_key: session.public_identifier,
        stats: vec![
            StatCard {
                title: "Land Parcels",
                value: "12",
                description: "Total tracked properties",
                trend: "+2 this month",
            },
            StatCard {
                title: "Supply Chain",
                value: "8",
                description: "Active suppliers",
                trend: "All verified",
            },
            StatCard {
                title: "Risk Score",
                value: "Low",
                description: "Insolvency risk",
                trend: "Stable",
            },
            StatCard {
                title: "Active Contracts",
                value: "3",
                description: "Futures positions",
                trend: "$125K value",
            },
        ],
        nav: vec![
            NavEntry {
                href: "/dashboard",
                label: "Dashboard",
            },
            NavEntry {
                href: "/dashboard/land-value",
                label: "Land Value",
            },
            NavEntry {
                href: "/dashboard/supply-chain",
                label: "Supply Chain",
            },
            NavEntry {
                href: "/dashboard/economics",
                label: "Economics",
            },
            NavEntry {
                href: "/dashboard/transact",
                label: "Transact",
            },
            NavEntry {
                href: "/dashboard/settings",
                label: "Settings",
            },
        ],
    })
}
