pub mod load_status;

pub use load_status::LoadStatus;
