pub mod error;
pub mod network;
pub mod topology;

pub use error::NetworkError;
pub use network::Network;
pub use topology::Topology;
