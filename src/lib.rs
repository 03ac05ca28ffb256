//! MemberHub - Membership Management Backend
//!
//! This crate tracks members, their subscription lifecycle (provision,
//! extend, cancel), the financial transactions paired with those lifecycle
//! events, and aggregate report figures for the dashboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
