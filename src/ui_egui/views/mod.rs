mod month_day_cell;
pub mod month_view;
pub mod decorations;
