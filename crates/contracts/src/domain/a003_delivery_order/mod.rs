pub mod aggregate;

pub use aggregate::{
    DeliveryOrder, DeliveryOrderDto, DoGenerateRequest, DoGenerateResponse, NextDoNumber,
};
