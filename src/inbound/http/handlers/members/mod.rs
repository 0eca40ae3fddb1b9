mod create;
mod delete;
mod list;
mod update;

pub use create::create_member;
pub use delete::delete_member;
pub use list::list_members;
pub use update::update_member;
