pub mod encoder;
pub mod params;

pub use encoder::{QueryEncoder, UrlEncoder};
pub use params::QueryParams;
