//! Transit router server.
//!
//! Loads a bus network (stops, road distances and bus routes), answers
//! per-bus and per-stop statistics, and finds the fastest journey between
//! two stops given a fixed boarding wait and a constant bus speed.

pub mod cache;
pub mod catalogue;
pub mod domain;
pub mod network;
pub mod router;
pub mod web;
