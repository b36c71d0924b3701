pub mod api_response;
pub mod health_status;
pub mod mutation_ack;
pub mod task;
pub mod task_draft;
pub mod task_filter;
pub mod task_list;
pub mod task_patch;
pub mod task_query;
pub mod task_sort;
pub mod timestamp;
pub mod token_data;
pub mod user_profile;
