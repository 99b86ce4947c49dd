//! GetGatewayKeyHandler - Query handler for the gateway's publishable key.

use crate::domain::billing::BillingError;

/// Query for the publishable gateway key.
///
/// The checkout UI needs the key id to open the gateway widget; the secret
/// never leaves the server.
#[derive(Debug, Clone)]
pub struct GetGatewayKeyQuery;

/// Result carrying the publishable key id.
#[derive(Debug, Clone)]
pub struct GetGatewayKeyResult {
    pub key_id: String,
}

/// Handler returning the configured publishable key id.
pub struct GetGatewayKeyHandler {
    key_id: String,
}

impl GetGatewayKeyHandler {
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
        }
    }

    pub async fn handle(
        &self,
        _query: GetGatewayKeyQuery,
    ) -> Result<GetGatewayKeyResult, BillingError> {
        Ok(GetGatewayKeyResult {
            key_id: self.key_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_key_id() {
        let handler = GetGatewayKeyHandler::new("rzp_test_abc123");

        let result = handler.handle(GetGatewayKeyQuery).await.unwrap();
        assert_eq!(result.key_id, "rzp_test_abc123");
    }
}
