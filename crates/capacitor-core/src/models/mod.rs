//! Frame and producer identity models.

pub mod frame;
pub mod producer_id;

pub use frame::Frame;
pub use producer_id::ProducerId;
