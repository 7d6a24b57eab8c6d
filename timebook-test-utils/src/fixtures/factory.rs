//! Factory functions for in-memory models.
//!
//! These build models with standard test values without touching a database, which is
//! what the pure statistics code is tested with.

use chrono::{NaiveDate, Utc};

use crate::model::{BookingModel, PersonModel, ProjectModel};

/// Create a mock person model with the provided names.
pub fn mock_person_model(id: i32, forename: &str, surname: &str) -> PersonModel {
    PersonModel {
        id,
        forename: forename.to_string(),
        surname: surname.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock project model with the provided name.
pub fn mock_project_model(id: i32, name: &str) -> ProjectModel {
    ProjectModel {
        id,
        name: name.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock booking model.
///
/// `started` and `finished` are `(hour, minute)` pairs on `work_day`, the owning user id is
/// fixed to 1 since statistics never look at it.
///
/// # Panics
/// Panics if an hour or minute is out of range.
pub fn mock_booking_model(
    id: i32,
    person_id: i32,
    project_id: i32,
    work_day: NaiveDate,
    started: (u32, u32),
    finished: (u32, u32),
    pause: i32,
) -> BookingModel {
    let now = Utc::now().naive_utc();

    BookingModel {
        id,
        user_id: 1,
        person_id,
        project_id,
        work_day,
        work_started: work_day.and_hms_opt(started.0, started.1, 0).unwrap(),
        work_finished: work_day.and_hms_opt(finished.0, finished.1, 0).unwrap(),
        pause,
        created_at: now,
        updated_at: now,
    }
}
