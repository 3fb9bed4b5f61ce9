//! Staff panel commands

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Subcommand;
use serde_json::json;
use shared::models::{
    CreateOrderRequest, Flavor, FlavorConfig, Item, NotifyChannel, OrderStatus,
    ProductionReportRequest, UpdateNotificationRequest, UpdatePriorityRequest,
};
use taiyaki_staff::{ClientConfig, FileStore, SessionManager};

use super::{print_envelope, print_json};

#[derive(Subcommand, Debug)]
pub enum StaffAction {
    /// Store a staff token.
    Login {
        /// Bearer token.
        token: String,
    },

    /// Forget the stored token.
    Logout,

    /// Check the stored token against the server; logs out if rejected.
    Validate,

    /// Save a base URL that overrides the configured one.
    SetBaseUrl {
        url: String,
    },

    /// List orders.
    Orders {
        /// Only these statuses (comma separated).
        #[arg(long, value_delimiter = ',')]
        status: Vec<OrderStatus>,
    },

    /// Create an order.
    Create {
        /// Ordered item as flavor:quantity (repeatable).
        #[arg(long = "item", required = true)]
        items: Vec<Item>,
        /// Serve this order first.
        #[arg(long)]
        priority: bool,
    },

    /// Mark an order as handed over.
    Complete {
        id: u32,
    },

    /// Cancel an order.
    Cancel {
        id: u32,
    },

    /// Set or clear the priority flag.
    Priority {
        id: u32,
        #[arg(action = clap::ArgAction::Set)]
        is_priority: bool,
    },

    /// Set where the customer is notified.
    Notify {
        id: u32,
        #[arg(long)]
        channel: NotifyChannel,
        #[arg(long)]
        target: String,
    },

    /// Show per-flavor cooking configuration.
    Flavors,

    /// Update one flavor's cooking configuration.
    SetFlavor {
        flavor: Flavor,
        /// Cooking time in minutes.
        #[arg(long)]
        cooking_time: u32,
        /// Items per batch.
        #[arg(long)]
        batch: u32,
    },

    /// Show unallocated stock.
    Stock,

    /// Report a produced batch.
    Produce {
        /// Produced item as flavor:quantity (repeatable).
        #[arg(long = "item", required = true)]
        items: Vec<Item>,
    },
}

pub async fn run(
    action: StaffAction,
    base_url: Option<&str>,
    state_file: &Path,
) -> anyhow::Result<ExitCode> {
    let config = match base_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::default(),
    };
    let store = Arc::new(FileStore::new(state_file));
    let http = config.build_http_client(store)?;
    let mut session = SessionManager::new(http);

    tracing::debug!(
        base_url = session.http().base_url(),
        authenticated = session.is_authenticated(),
        "Staff session loaded"
    );

    match action {
        StaffAction::Login { token } => {
            let ok = session.login(token);
            print_json(&json!({ "authenticated": session.is_authenticated() }))?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        StaffAction::Logout => {
            session.logout();
            print_json(&json!({ "authenticated": false }))?;
            Ok(ExitCode::SUCCESS)
        }
        StaffAction::Validate => {
            let valid = session.validate_token().await;
            print_json(&json!({ "authenticated": valid }))?;
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        StaffAction::SetBaseUrl { url } => {
            session.http_mut().set_base_url(url)?;
            print_json(&json!({ "baseUrl": session.http().base_url() }))?;
            Ok(ExitCode::SUCCESS)
        }
        StaffAction::Orders { status } => {
            print_envelope(&session.http().orders().list(&status).await)
        }
        StaffAction::Create { items, priority } => {
            let request = CreateOrderRequest {
                items,
                is_priority: priority.then_some(true),
            };
            print_envelope(&session.http().orders().create(&request).await)
        }
        StaffAction::Complete { id } => {
            print_envelope(&session.http().orders().complete(id).await)
        }
        StaffAction::Cancel { id } => print_envelope(&session.http().orders().cancel(id).await),
        StaffAction::Priority { id, is_priority } => {
            let request = UpdatePriorityRequest { is_priority };
            print_envelope(&session.http().orders().update_priority(id, &request).await)
        }
        StaffAction::Notify {
            id,
            channel,
            target,
        } => {
            let request = UpdateNotificationRequest { channel, target };
            print_envelope(
                &session
                    .http()
                    .orders()
                    .update_notification(id, &request)
                    .await,
            )
        }
        StaffAction::Flavors => print_envelope(&session.http().flavors().configs().await),
        StaffAction::SetFlavor {
            flavor,
            cooking_time,
            batch,
        } => {
            let config = FlavorConfig {
                cooking_time_minutes: cooking_time,
                quantity_per_batch: batch,
            };
            print_envelope(&session.http().flavors().update(flavor, &config).await)
        }
        StaffAction::Stock => print_envelope(&session.http().stock().levels().await),
        StaffAction::Produce { items } => {
            let report = ProductionReportRequest { items };
            print_envelope(&session.http().production().report(&report).await)
        }
    }
}
