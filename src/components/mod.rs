pub mod dialog;
pub mod field_error;
pub mod nav_bar;
pub mod recipe_card;
