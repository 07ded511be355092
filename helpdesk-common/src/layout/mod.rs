//! Class computation for the responsive box primitives

mod container;
mod flex;
mod grid;
mod item;
mod options;
mod section;

pub use container::ContainerStyle;
pub use flex::FlexStyle;
pub use grid::{GridOutput, GridStyle, DEFAULT_MIN_COL_WIDTH};
pub use item::ItemStyle;
pub use options::{
    Align, Background, BoxStyle, ContainerTag, FlexDirection, Justify, MaxWidth, Shadow, Spacing,
    Wrap,
};
pub use section::SectionStyle;
