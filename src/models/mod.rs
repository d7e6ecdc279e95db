pub mod catalog;
pub mod item;

pub use catalog::Catalog;
pub use item::Item;
