use sea_orm::DatabaseConnection;

use crate::{
    model::booking::{BookingDto, BookingInputDto, BookingPageDto, UpdateBookingDto},
    server::{
        data::{booking::BookingRepository, project::ProjectRepository, user::UserRepository},
        error::{auth::AuthError, booking::BookingError, Error},
        model::db::BookingModel,
        util::time::{validate_interval, IntervalViolation},
    },
};

/// Maximum number of bookings returned per page
pub const MAX_BOOKING_PAGE_LIMIT: u64 = 1000;

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bookings owned by the provided user, ordered by ID
    pub async fn get_user_bookings(&self, user_id: i32) -> Result<Vec<BookingDto>, Error> {
        let bookings = BookingRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(bookings.into_iter().map(booking_to_dto).collect())
    }

    /// A page of bookings across all users
    ///
    /// `limit` is clamped to [`MAX_BOOKING_PAGE_LIMIT`], the returned page carries the
    /// limit actually applied.
    pub async fn get_booking_page(&self, offset: u64, limit: u64) -> Result<BookingPageDto, Error> {
        let limit = limit.min(MAX_BOOKING_PAGE_LIMIT);

        let (bookings, total) = BookingRepository::new(self.db)
            .get_page(offset, limit)
            .await?;

        Ok(BookingPageDto {
            data: bookings.into_iter().map(booking_to_dto).collect(),
            offset,
            limit,
            total,
        })
    }

    /// Creates a booking owned by the user and attributed to the user's person
    ///
    /// # Returns
    /// - `Ok(BookingDto)` - The created booking
    /// - `Err(Error::BookingError(BookingError::InvalidInterval | BookingError::InvalidPause))` -
    ///   Interval is reversed or the pause doesn't fit into it
    /// - `Err(Error::BookingError(BookingError::ProjectNotFound))` - Unknown project
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - User was deleted
    /// - `Err(Error::DbErr)` - Database error
    pub async fn create_booking(
        &self,
        user_id: i32,
        booking: BookingInputDto,
    ) -> Result<BookingDto, Error> {
        validate_booking(&booking)?;

        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        self.require_project(booking.project_id).await?;

        let booking = BookingRepository::new(self.db)
            .create(user.id, user.person_id, &booking)
            .await?;

        Ok(booking_to_dto(booking))
    }

    /// Updates a booking of the user
    ///
    /// Both the user ID sent with the booking and the stored owner have to be the
    /// logged in user.
    ///
    /// # Returns
    /// - `Ok(BookingDto)` - The updated booking
    /// - `Err(Error::BookingError(BookingError::NotOwner))` - Booking belongs to another user
    /// - `Err(Error::BookingError(BookingError::BookingNotFound))` - Unknown booking
    /// - `Err(Error::BookingError(_))` - Validation failed like for [`Self::create_booking`]
    /// - `Err(Error::DbErr)` - Database error
    pub async fn update_booking(
        &self,
        user_id: i32,
        booking_id: i32,
        update: UpdateBookingDto,
    ) -> Result<BookingDto, Error> {
        if update.user_id != user_id {
            return Err(BookingError::NotOwner {
                user_id,
                booking_id,
            }
            .into());
        }

        validate_booking(&update.booking)?;

        let booking_repo = BookingRepository::new(self.db);

        let Some(existing) = booking_repo.get_by_id(booking_id).await? else {
            return Err(BookingError::BookingNotFound(booking_id).into());
        };
        if existing.user_id != user_id {
            return Err(BookingError::NotOwner {
                user_id,
                booking_id,
            }
            .into());
        }

        self.require_project(update.booking.project_id).await?;

        let Some(booking) = booking_repo.update(booking_id, &update.booking).await? else {
            return Err(BookingError::BookingNotFound(booking_id).into());
        };

        Ok(booking_to_dto(booking))
    }

    /// Deletes a booking of the user
    ///
    /// Bookings of other users are reported as not found.
    pub async fn delete_booking(&self, user_id: i32, booking_id: i32) -> Result<(), Error> {
        let deleted = BookingRepository::new(self.db)
            .delete_owned(booking_id, user_id)
            .await?;

        if !deleted {
            return Err(BookingError::BookingNotFound(booking_id).into());
        }

        Ok(())
    }

    async fn require_project(&self, project_id: i32) -> Result<(), Error> {
        match ProjectRepository::new(self.db).get_by_id(project_id).await? {
            Some(_) => Ok(()),
            None => Err(BookingError::ProjectNotFound(project_id).into()),
        }
    }
}

fn validate_booking(booking: &BookingInputDto) -> Result<(), BookingError> {
    validate_interval(booking.work_started, booking.work_finished, booking.pause).map_err(
        |violation| match violation {
            IntervalViolation::Reversed => BookingError::InvalidInterval,
            IntervalViolation::Pause => BookingError::InvalidPause(booking.pause),
        },
    )
}

fn booking_to_dto(booking: BookingModel) -> BookingDto {
    BookingDto {
        id: booking.id,
        user_id: booking.user_id,
        person_id: booking.person_id,
        project_id: booking.project_id,
        work_day: booking.work_day,
        work_started: booking.work_started,
        work_finished: booking.work_finished,
        pause: booking.pause,
    }
}
