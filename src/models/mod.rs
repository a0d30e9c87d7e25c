pub mod activity;

pub use activity::{ActivityDirectory, ActivityRecord};
