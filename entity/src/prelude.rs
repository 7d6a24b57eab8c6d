pub use super::booking::Entity as Booking;
pub use super::person::Entity as Person;
pub use super::project::Entity as Project;
pub use super::timebook_group::Entity as TimebookGroup;
pub use super::timebook_user::Entity as TimebookUser;
pub use super::timebook_user_group::Entity as TimebookUserGroup;
