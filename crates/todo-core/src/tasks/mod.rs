pub mod load_state;
pub mod task_counts;
pub mod task_list_view;

pub use load_state::LoadState;
pub use task_counts::TaskCounts;
pub use task_list_view::TaskListView;
