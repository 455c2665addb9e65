pub mod grid;
pub mod month_view;
pub mod previews;
pub mod table_view;
pub mod theme;
