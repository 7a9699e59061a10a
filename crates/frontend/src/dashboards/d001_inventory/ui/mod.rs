mod dashboard;
mod forms;
mod product_table;
mod summary;

pub use dashboard::InventoryDashboard;
