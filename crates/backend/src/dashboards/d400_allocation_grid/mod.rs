pub mod pivot;
pub mod service;

pub use pivot::AllocationPivot;
