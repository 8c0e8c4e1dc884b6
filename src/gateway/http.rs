// src/gateway/http.rs
// Pooled HTTP client for the inference and IAM endpoints

use crate::error::Result;
use std::time::Duration;

const MAX_IDLE_PER_HOST: usize = 10;

/// Build the client every gateway call goes through.
///
/// Fails instead of falling back to a default client, which would carry no
/// timeouts.
pub(crate) fn create_client(
    request_timeout: Duration,
    connect_timeout: Duration,
) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_with_timeouts() {
        assert!(create_client(Duration::from_secs(5), Duration::from_secs(1)).is_ok());
    }

    #[tokio::test]
    async fn test_request_timeout_applies() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold the connection without ever answering
        let _hold = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = create_client(Duration::from_millis(200), Duration::from_secs(1)).unwrap();
        let err = client
            .get(format!("http://{}/", addr))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }
}
