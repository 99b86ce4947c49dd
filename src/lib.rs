//! CourseKit - Course Platform Backend
//!
//! This crate implements the subscription billing core for the CourseKit
//! platform: subscription purchase, payment verification, refunded
//! cancellation, and payment statistics over the Razorpay gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
