pub mod d400_allocation_grid;
pub mod d401_row_counts;
