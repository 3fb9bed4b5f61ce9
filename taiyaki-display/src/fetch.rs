use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{DisplayError, DisplayResult};

/// Send `request` and decode a JSON body; non-success statuses become
/// [`DisplayError::Fetch`] carrying the status text.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    context: &str,
) -> DisplayResult<T> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());
        tracing::debug!(status = status.as_u16(), context, "Display fetch failed");
        return Err(DisplayError::Fetch {
            context: context.to_string(),
            status: status.as_u16(),
            status_text,
        });
    }

    Ok(response.json().await?)
}
