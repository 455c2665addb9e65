pub mod event_list;
pub mod month;
pub mod table;
