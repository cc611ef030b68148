pub mod config;
pub mod error;
pub mod filters;
pub mod params;
pub mod search;

pub use config::*;
pub use error::*;
pub use filters::*;
pub use params::*;
pub use search::*;
