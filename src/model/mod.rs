pub mod document;
pub mod timeline;
pub mod work_order;

pub use document::{WorkOrderData, WorkOrderDocument};
pub use timeline::{configure, TimeWindow, TimescaleConfig, TimescaleMode};
pub use work_order::{WorkCenter, WorkOrder, WorkOrderStatus};
