pub mod bounds;
pub mod geo;
pub mod viewport;
