use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{BookingModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn booking(&self) -> BookingFixtures<'_> {
        BookingFixtures { setup: self }
    }
}

pub struct BookingFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> BookingFixtures<'a> {
    /// Insert a booking owned by `user` and attributed to the user's person.
    ///
    /// # Arguments
    /// - `work_day` - Day the work happened on
    /// - `started` / `finished` - `(hour, minute)` on `work_day`
    /// - `pause` - Pause in minutes
    pub async fn insert_booking(
        &self,
        user: &UserModel,
        project_id: i32,
        work_day: NaiveDate,
        started: (u32, u32),
        finished: (u32, u32),
        pause: i32,
    ) -> Result<BookingModel, TestError> {
        let mock = factory::mock_booking_model(
            0,
            user.person_id,
            project_id,
            work_day,
            started,
            finished,
            pause,
        );
        let now = Utc::now().naive_utc();

        Ok(entity::booking::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            person_id: ActiveValue::Set(mock.person_id),
            project_id: ActiveValue::Set(mock.project_id),
            work_day: ActiveValue::Set(mock.work_day),
            work_started: ActiveValue::Set(mock.work_started),
            work_finished: ActiveValue::Set(mock.work_finished),
            pause: ActiveValue::Set(mock.pause),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
