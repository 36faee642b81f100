pub mod create_resource_group;
pub mod delete_resource_group;
pub mod get_machine_group;
pub mod get_resource_group;
pub mod list_machine_groups;
pub mod list_resource_groups;
pub mod types;
