pub mod a001_base_depot;
pub mod a002_sub_godown;
pub mod a003_delivery_order;
pub mod a004_do_allocation;
