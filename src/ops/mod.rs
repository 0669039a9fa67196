pub mod calendar;
pub mod filter;
pub mod task_ops;
pub mod task_view;

pub use filter::visible_tasks;
pub use task_view::TaskView;
