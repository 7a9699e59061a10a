pub mod dto;

pub use dto::{DashboardBootstrap, SummarySnapshot};
