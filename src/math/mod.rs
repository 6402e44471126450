pub mod index;

pub use index::idx;
