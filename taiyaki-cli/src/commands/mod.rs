pub mod screens;
pub mod staff;

use std::process::ExitCode;

use serde::Serialize;
use shared::ApiResponse;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an envelope; an `error` field makes the process exit non-zero
pub fn print_envelope<T: Serialize>(response: &ApiResponse<T>) -> anyhow::Result<ExitCode> {
    print_json(response)?;
    Ok(if response.is_err() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
