mod get_me;
mod save_measurements;
mod update_name;
