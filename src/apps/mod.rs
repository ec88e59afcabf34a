mod system;

pub use system::{all_entries, AppList, AppLists};
