pub mod add_recipe;
pub mod home;
pub mod login;
pub mod recipe_details;
pub mod recipe_list;
