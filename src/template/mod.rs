pub mod data;
pub mod filler;

pub use data::FrontMatter;
pub use filler::{fill, CERTIFICATE_TEMPLATE};
