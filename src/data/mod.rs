pub mod data_item;
pub mod logic;
pub mod semeion;

pub use data_item::DataItem;
pub use logic::{logic_gate_table, GATE_NAMES};
