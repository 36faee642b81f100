pub mod create_training_job;
pub mod delete_training_job;
pub mod get_training_job;
pub mod list_training_job_logs;
pub mod list_training_job_metrics;
pub mod list_training_jobs;
pub mod stop_training_job;
pub mod types;
