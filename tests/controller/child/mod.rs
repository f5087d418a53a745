mod create_child;
mod save_child_measurements;
