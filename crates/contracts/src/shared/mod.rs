pub mod date_utils;
pub mod delimited;
pub mod pagination;
pub mod scalar;
pub mod validation;

pub use delimited::DelimitedList;
pub use pagination::{PageQuery, Paginated, Pagination};
pub use scalar::Scalar;
