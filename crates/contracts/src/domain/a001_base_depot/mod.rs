pub mod aggregate;

pub use aggregate::BaseDepot;
