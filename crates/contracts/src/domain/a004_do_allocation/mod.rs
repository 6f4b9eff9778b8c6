pub mod aggregate;

pub use aggregate::{
    same_godown, validate_entries, AllocationEntry, AllocationRecord, NormalizedAllocation,
};
