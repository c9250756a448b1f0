pub mod datasource;
pub mod model;

pub use datasource::Datasource;
pub use model::{Availability, Coordinates, DataPoint, Lot, LotError, LotKind, LotState};
