pub mod aggregate;

pub use aggregate::SubGodown;
