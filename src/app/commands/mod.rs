pub mod address;
pub mod encode;
