pub mod error;
pub mod flags;
pub mod geo;
pub mod header;
pub mod record;

pub use error::*;
pub use flags::*;
pub use geo::*;
pub use header::*;
pub use record::*;
