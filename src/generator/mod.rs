pub mod ini;

pub use ini::write;
