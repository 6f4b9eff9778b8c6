pub mod record_status;
pub mod vahtuk;

pub use record_status::RecordStatus;
pub use vahtuk::Vahtuk;
