//! Value objects used by the domain entities.

pub mod stay;

pub use stay::Stay;
