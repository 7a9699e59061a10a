pub mod aggregate;
pub mod request;

pub use aggregate::{ProductView, StockStatus};
pub use request::{AddProductRequest, StockMoveRequest};
