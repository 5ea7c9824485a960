pub mod panels;
pub mod table;
pub mod tabs;
pub mod widgets;
