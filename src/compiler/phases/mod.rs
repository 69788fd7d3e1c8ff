pub mod types;

pub mod encode;
pub mod scan;

pub use encode::{encode, encode_all};
pub use scan::scan;
