pub mod client;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::Herrenberg;
pub use decode::decode;
pub use error::HerrenbergError;
pub use normalize::normalize;
pub use types::{ParkApiLot, ParkApiLotType, ParkApiResponse, ParkApiState};
