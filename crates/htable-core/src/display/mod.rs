pub mod html;

pub use html::{Tag, escape};
