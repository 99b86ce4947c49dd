//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::billing::{
    // Commands
    BuySubscriptionCommand, BuySubscriptionHandler, BuySubscriptionResult,
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
    VerifySubscriptionCommand, VerifySubscriptionHandler, VerifySubscriptionResult,
    // Queries
    GetGatewayKeyHandler, GetGatewayKeyQuery, GetGatewayKeyResult,
    GetPaymentStatsHandler, GetPaymentStatsQuery, GetPaymentStatsResult,
    GetUserStatsHandler, GetUserStatsQuery, GetUserStatsResult,
};
