//! GetPaymentStatsHandler - Query handler for the monthly payment report.
//!
//! Fetches a page of gateway subscriptions and buckets their start times
//! into the twelve calendar months.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::billing::{BillingError, MonthlyHistogram};
use crate::domain::foundation::Timestamp;
use crate::ports::{GatewaySubscription, ListSubscriptionsQuery, PaymentGateway};

/// Page size used when the caller does not ask for one.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page the gateway is asked for in one call.
const MAX_PAGE_SIZE: u32 = 100;

/// Query for the monthly payment report.
#[derive(Debug, Clone, Default)]
pub struct GetPaymentStatsQuery {
    pub count: Option<u32>,
    pub skip: Option<u32>,
}

/// One page of subscriptions plus the monthly aggregation.
#[derive(Debug, Clone)]
pub struct GetPaymentStatsResult {
    /// The raw page, newest first.
    pub items: Vec<GatewaySubscription>,

    /// Counts keyed by English month name.
    pub by_month: HashMap<String, u64>,

    /// The same counts ordered January through December.
    pub monthly_record: [u64; 12],
}

/// Handler for the monthly payment report.
///
/// Buckets by calendar month name across all years in the fetched page, so
/// a January 2023 start and a January 2024 start land in the same bucket.
pub struct GetPaymentStatsHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl GetPaymentStatsHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        query: GetPaymentStatsQuery,
    ) -> Result<GetPaymentStatsResult, BillingError> {
        // 1. Clamp paging to sane bounds
        let count = query.count.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
        let skip = query.skip.unwrap_or(0);

        // 2. Fetch the page
        let page = self
            .gateway
            .list_subscriptions(ListSubscriptionsQuery { count, skip })
            .await?;

        // 3. Bucket start times; subscriptions the gateway has not started
        //    yet carry no start time and are left out of the histogram
        let histogram = MonthlyHistogram::from_start_times(
            page.items
                .iter()
                .filter_map(|s| s.start_at)
                .filter_map(|secs| u64::try_from(secs).ok())
                .map(Timestamp::from_unix_secs),
        );

        Ok(GetPaymentStatsResult {
            by_month: histogram.by_month(),
            monthly_record: histogram.monthly_record(),
            items: page.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::SubscriptionStatus;
    use crate::ports::{
        CreateSubscriptionRequest, GatewayError, GatewayRefund, RefundSpeed, SubscriptionPage,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockGateway {
        items: Vec<GatewaySubscription>,
        queries: Mutex<Vec<ListSubscriptionsQuery>>,
        fail_list: bool,
    }

    impl MockGateway {
        fn with_items(items: Vec<GatewaySubscription>) -> Self {
            Self {
                items,
                queries: Mutex::new(Vec::new()),
                fail_list: false,
            }
        }

        fn failing() -> Self {
            Self {
                items: Vec::new(),
                queries: Mutex::new(Vec::new()),
                fail_list: true,
            }
        }

        fn queries(&self) -> Vec<ListSubscriptionsQuery> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn create_subscription(
            &self,
            _request: CreateSubscriptionRequest,
        ) -> Result<GatewaySubscription, GatewayError> {
            Err(GatewayError::provider("Not implemented in mock"))
        }

        async fn cancel_subscription(
            &self,
            _subscription_id: &str,
        ) -> Result<GatewaySubscription, GatewayError> {
            Err(GatewayError::provider("Not implemented in mock"))
        }

        async fn refund_payment(
            &self,
            _payment_id: &str,
            _speed: RefundSpeed,
        ) -> Result<GatewayRefund, GatewayError> {
            Err(GatewayError::provider("Not implemented in mock"))
        }

        async fn list_subscriptions(
            &self,
            query: ListSubscriptionsQuery,
        ) -> Result<SubscriptionPage, GatewayError> {
            self.queries.lock().unwrap().push(query);
            if self.fail_list {
                return Err(GatewayError::network("Connection refused"));
            }
            Ok(SubscriptionPage {
                items: self.items.clone(),
            })
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn subscription(id: &str, start_at: Option<i64>) -> GatewaySubscription {
        GatewaySubscription {
            id: id.to_string(),
            status: SubscriptionStatus::active(),
            start_at,
            plan_id: Some("plan_basic".to_string()),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn defaults_to_first_ten_subscriptions() {
        let gateway = Arc::new(MockGateway::with_items(vec![]));

        let handler = GetPaymentStatsHandler::new(gateway.clone());
        handler.handle(GetPaymentStatsQuery::default()).await.unwrap();

        let queries = gateway.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].count, 10);
        assert_eq!(queries[0].skip, 0);
    }

    #[tokio::test]
    async fn caps_requested_page_size() {
        let gateway = Arc::new(MockGateway::with_items(vec![]));

        let handler = GetPaymentStatsHandler::new(gateway.clone());
        handler
            .handle(GetPaymentStatsQuery {
                count: Some(500),
                skip: Some(7),
            })
            .await
            .unwrap();

        let queries = gateway.queries();
        assert_eq!(queries[0].count, 100);
        assert_eq!(queries[0].skip, 7);
    }

    #[tokio::test]
    async fn buckets_start_times_by_month_across_years() {
        let gateway = Arc::new(MockGateway::with_items(vec![
            subscription("sub_1", Some(1705276800)), // 2024-01-15
            subscription("sub_2", Some(1673740800)), // 2023-01-15
            subscription("sub_3", Some(1710460800)), // 2024-03-15
        ]));

        let handler = GetPaymentStatsHandler::new(gateway);
        let result = handler.handle(GetPaymentStatsQuery::default()).await.unwrap();

        assert_eq!(result.by_month["January"], 2);
        assert_eq!(result.by_month["March"], 1);
        assert_eq!(result.monthly_record[0], 2);
        assert_eq!(result.monthly_record[2], 1);
        assert_eq!(result.monthly_record.iter().sum::<u64>(), 3);
    }

    #[tokio::test]
    async fn returns_raw_items_alongside_the_aggregation() {
        let gateway = Arc::new(MockGateway::with_items(vec![
            subscription("sub_1", Some(1705276800)),
            subscription("sub_2", None),
        ]));

        let handler = GetPaymentStatsHandler::new(gateway);
        let result = handler.handle(GetPaymentStatsQuery::default()).await.unwrap();

        // Unstarted subscriptions appear in the page but not the histogram
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.monthly_record.iter().sum::<u64>(), 1);
    }

    #[tokio::test]
    async fn fails_when_gateway_fails() {
        let gateway = Arc::new(MockGateway::failing());

        let handler = GetPaymentStatsHandler::new(gateway);
        let result = handler.handle(GetPaymentStatsQuery::default()).await;

        assert!(matches!(result, Err(BillingError::Gateway { .. })));
    }
}
