//! Pulse Guide - Interactive first-aid step guide
//!
//! This crate walks a user through a validated yes/no decision graph. The
//! graph is loaded once at startup and shared read-only; every session holds
//! its own cursor and moves it one edge per host trigger.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
