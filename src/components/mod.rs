//! UI Components
//!
//! Leptos components. Display decisions come from `crate::view`.

mod auth_section;
mod new_task_form;
mod notice_bar;
mod task_item;
mod task_list;
mod task_section;

pub use auth_section::AuthSection;
pub use new_task_form::NewTaskForm;
pub use notice_bar::NoticeBar;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use task_section::TaskSection;
