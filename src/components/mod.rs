pub mod add_form;
pub mod header;
pub mod task_item;
pub mod task_list;
