//! Wire types shared between the inventory dashboard client and its server.

pub mod dashboards;
pub mod domain;
pub mod shared;
