use crate::arm::Subscription;
use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

pub const SEPARATOR: &str = "-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width columns
    #[default]
    Plain,
    /// Bordered table
    Table,
    Json,
}

#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRow {
    #[tabled(rename = "Subscription_Name")]
    pub display_name: String,
    #[tabled(rename = "Subscription")]
    pub subscription_id: String,
    #[tabled(rename = "Tenant")]
    pub tenant_id: String,
    #[tabled(rename = "Is_Default")]
    pub is_default: bool,
}

/// Marks the row whose ID equals `active`.
pub fn rows(subscriptions: &[Subscription], active: Option<&str>) -> Vec<SubscriptionRow> {
    subscriptions
        .iter()
        .map(|sub| SubscriptionRow {
            display_name: sub.display_name.clone(),
            subscription_id: sub.subscription_id.clone(),
            tenant_id: sub.tenant_id.clone(),
            is_default: active.is_some_and(|id| id.eq_ignore_ascii_case(&sub.subscription_id)),
        })
        .collect()
}

pub fn render(rows: &[SubscriptionRow], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain(rows)),
        OutputFormat::Table => Ok(Table::new(rows).with(Style::psql()).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(rows),
    }
}

fn plain(rows: &[SubscriptionRow]) -> String {
    let mut out = line("Subscription_Name", "Subscription", "Tenant", "Is_Default");

    for row in rows {
        out.push_str(&line(
            &row.display_name,
            &row.subscription_id,
            &row.tenant_id,
            if row.is_default { "true" } else { "false" },
        ));
    }

    out
}

fn line(name: &str, id: &str, tenant: &str, default: &str) -> String {
    format!("{name:<40} {id:<36} {tenant:<36} {default:<10}\n")
}
