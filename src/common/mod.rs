mod category;
mod desktop_entry;
mod file_id;
mod table;

pub use category::{classify, Category, CATEGORY_PRIORITY};
pub use desktop_entry::DesktopEntry;
pub use file_id::DesktopFileId;
pub use table::render_table;
