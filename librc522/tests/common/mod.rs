// Shared helpers for the integration test crates. Each aggregator pulls this
// in with `#[path = "../common/mod.rs"]`, so not every crate uses every item.
#![allow(dead_code)]

pub mod fixtures;
