use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{model::booking::BookingInputDto, server::model::db::BookingModel};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new instance of [`BookingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Store a new booking for the provided user & person
    pub async fn create(
        &self,
        user_id: i32,
        person_id: i32,
        booking: &BookingInputDto,
    ) -> Result<BookingModel, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        let booking = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(person_id),
            project_id: ActiveValue::Set(booking.project_id),
            work_day: ActiveValue::Set(booking.work_day),
            work_started: ActiveValue::Set(booking.work_started),
            work_finished: ActiveValue::Set(booking.work_finished),
            pause: ActiveValue::Set(booking.pause),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        booking.insert(self.db).await
    }

    pub async fn get_by_id(&self, booking_id: i32) -> Result<Option<BookingModel>, DbErr> {
        entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await
    }

    /// Get all bookings of a user ordered by ID
    pub async fn get_many_by_user_id(&self, user_id: i32) -> Result<Vec<BookingModel>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Get up to `limit` bookings across all users ordered by ID, skipping the first `offset`
    pub async fn get_range(&self, offset: u64, limit: u64) -> Result<Vec<BookingModel>, DbErr> {
        entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Get a page of bookings across all users ordered by ID
    ///
    /// Returns the page together with the total number of stored bookings.
    pub async fn get_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<BookingModel>, u64), DbErr> {
        let bookings = self.get_range(offset, limit).await?;

        let total = entity::prelude::Booking::find().count(self.db).await?;

        Ok((bookings, total))
    }

    /// Replace the booking fields of an existing booking
    ///
    /// Owner & person are kept as they are, returns `Ok(None)` if the booking doesn't exist.
    pub async fn update(
        &self,
        booking_id: i32,
        booking: &BookingInputDto,
    ) -> Result<Option<BookingModel>, DbErr> {
        let existing = match entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut booking_am = existing.into_active_model();
        booking_am.project_id = ActiveValue::Set(booking.project_id);
        booking_am.work_day = ActiveValue::Set(booking.work_day);
        booking_am.work_started = ActiveValue::Set(booking.work_started);
        booking_am.work_finished = ActiveValue::Set(booking.work_finished);
        booking_am.pause = ActiveValue::Set(booking.pause);
        booking_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());

        let booking = booking_am.update(self.db).await?;

        Ok(Some(booking))
    }

    /// Delete a booking if it is owned by the provided user
    ///
    /// Returns `true` if a booking was deleted.
    pub async fn delete_owned(&self, booking_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::Id.eq(booking_id))
            .filter(entity::booking::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
