//! Public display and wait-time commands

use std::process::ExitCode;

use clap::Subcommand;
use taiyaki_display::{DisplayBoard, WaitTimeBoard};

use super::print_json;

#[derive(Subcommand, Debug)]
pub enum DisplayAction {
    /// Show ready / cooking / waiting order ids.
    Board,
}

#[derive(Subcommand, Debug)]
pub enum WaitAction {
    /// Show one order and its estimated wait.
    Order {
        /// Order id.
        id: u32,
    },
    /// Show estimated wait per flavor.
    Times,
    /// Show ready / cooking / waiting order ids.
    Board,
}

pub async fn run_display(action: DisplayAction, base_url: Option<&str>) -> anyhow::Result<ExitCode> {
    let board = match base_url {
        Some(url) => DisplayBoard::new(Some(url))?,
        None => DisplayBoard::from_env()?,
    };
    tracing::debug!(base_url = board.base_url(), "Display board ready");

    match action {
        DisplayAction::Board => print_json(&board.fetch_display_orders().await?)?,
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn run_wait(action: WaitAction, base_url: Option<&str>) -> anyhow::Result<ExitCode> {
    let board = match base_url {
        Some(url) => WaitTimeBoard::new(Some(url))?,
        None => WaitTimeBoard::from_env()?,
    };
    tracing::debug!(base_url = board.base_url(), "Wait-time board ready");

    match action {
        WaitAction::Order { id } => print_json(&board.fetch_order(id).await?)?,
        WaitAction::Times => print_json(&board.fetch_wait_times().await?)?,
        WaitAction::Board => print_json(&board.fetch_orders_display().await?)?,
    }
    Ok(ExitCode::SUCCESS)
}
