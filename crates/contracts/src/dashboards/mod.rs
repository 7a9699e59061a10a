pub mod d001_inventory_summary;
