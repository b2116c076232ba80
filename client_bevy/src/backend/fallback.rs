use std::future::Future;

use bevy::log::debug;

use super::requests::ApiError;

/// Await `request` and map it through `on_success`, or log and substitute `on_fallback`.
///
/// Every backend call goes through here: no retries, the first failure decides.
pub async fn with_fallback<T, R, Fut>(
    endpoint: &str,
    request: Fut,
    on_success: impl FnOnce(T) -> R,
    on_fallback: impl FnOnce(ApiError) -> R,
) -> R
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    match request.await {
        Ok(value) => on_success(value),
        Err(err) => {
            debug!("{endpoint} not available ({err}), using local fallback");
            on_fallback(err)
        }
    }
}
