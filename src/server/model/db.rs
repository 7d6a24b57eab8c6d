//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate.

/// Login account. Every user owns exactly one person profile.
///
/// # Fields (from `entity::timebook_user::Model`)
/// - `id` - Primary key
/// - `uid` - Unique login name
/// - `password_hash` - Hex encoded SHA-256 digest of the password
/// - `person_id` - Foreign key to the user's person profile
/// - `created_at` - Timestamp when the user was registered
pub type UserModel = entity::timebook_user::Model;

/// Person profile holding the names bookings are attributed to.
pub type PersonModel = entity::person::Model;

pub type GroupModel = entity::timebook_group::Model;

/// Membership of a user in a group.
pub type UserGroupModel = entity::timebook_user_group::Model;

pub type ProjectModel = entity::project::Model;

/// A recorded work interval of one person on one project on one day.
///
/// # Fields (from `entity::booking::Model`)
/// - `id` - Primary key
/// - `user_id` - User who created and owns the booking
/// - `person_id` - Person the work is attributed to
/// - `project_id` - Project the work was done for
/// - `work_day` - Calendar day of the work
/// - `work_started` / `work_finished` - Start and end of the interval
/// - `pause` - Pause in minutes, subtracted from the interval
pub type BookingModel = entity::booking::Model;
