//! Shared HTTP Client Module
//!
//! Provides global, lazy-initialized HTTP clients with connection pooling.
//! This eliminates the overhead of creating new clients per request and
//! enables connection reuse across all collaborator calls.

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Global HTTP client for language-model API calls
///
/// Configuration tuned for long-running generation requests:
/// - 120s timeout (model completions can be slow)
/// - connection pooling with keepalive for repeated pipeline runs
pub static MODEL_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_max_idle_per_host(8)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .build()
        .expect("Failed to create model HTTP client")
});

/// Global HTTP client for search API calls
///
/// Shorter timeout: search responses are small and fast compared to
/// model completions.
pub static SEARCH_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create search HTTP client")
});

/// Get the global model HTTP client
#[inline]
pub fn model_client() -> &'static Client {
    &MODEL_CLIENT
}

/// Get the global search HTTP client
#[inline]
pub fn search_client() -> &'static Client {
    &SEARCH_CLIENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clients_are_created() {
        let _ = model_client();
        let _ = search_client();
    }

    #[test]
    fn test_clients_are_same_instance() {
        let client1 = model_client();
        let client2 = model_client();
        assert!(std::ptr::eq(client1, client2));
    }
}
