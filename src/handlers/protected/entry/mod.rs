pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::entry_create;
pub use delete::entry_delete;
pub use list::entry_list;
pub use update::entry_update;
