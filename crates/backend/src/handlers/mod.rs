pub mod a003_delivery_order;
pub mod a004_do_allocation;
pub mod d400_allocation_grid;
pub mod d401_row_counts;
