//! Names of the groups seeded by the migrations.

/// Members may administrate users, projects and see every booking
pub const ADMIN_GROUP: &str = "admin";

/// Group every registered user is added to
pub const EMPLOYEE_GROUP: &str = "employee";
