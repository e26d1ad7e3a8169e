pub mod classify;
pub mod error;
pub mod geocode;
mod http;
pub mod normalize;
pub mod overpass;
pub mod types;

pub use classify::classify;
pub use error::OsmError;
pub use geocode::GeocoderClient;
pub use normalize::{normalize_element, normalize_elements};
pub use overpass::{AreaQueryOutcome, BoundingBox, OverpassClient};
pub use types::{Coordinates, OverpassElement, Tags};
