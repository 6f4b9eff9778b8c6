pub mod a003_delivery_order;
pub mod a004_do_allocation;
