pub mod d001_inventory;

pub use d001_inventory::ui::InventoryDashboard;
