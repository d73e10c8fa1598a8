pub mod calendar;
pub mod coords;
pub mod header;
pub mod lanes;

pub use header::{build_header_segments, month_separators, HeaderSegment};
pub use lanes::{layout_center, CenterLayout, OrderLayout};
