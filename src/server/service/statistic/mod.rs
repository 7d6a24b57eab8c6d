//! Booking statistics.
//!
//! Bookings, persons and projects are fetched concurrently, then handed to the pure
//! [`aggregate::aggregate_booking_statistics`] which groups worked hours by day, project
//! and employee.

pub mod aggregate;

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::statistic::BookingStatisticsDto,
    server::{
        data::{booking::BookingRepository, person::PersonRepository, project::ProjectRepository},
        error::statistic::StatisticError,
    },
};

use self::aggregate::aggregate_booking_statistics;

/// Maximum number of bookings considered by the statistics
pub const STATISTICS_BOOKING_LIMIT: u64 = 1000;

pub struct StatisticService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticService<'a> {
    /// Creates a new instance of [`StatisticService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Calculates hours per day, project and employee over the first
    /// [`STATISTICS_BOOKING_LIMIT`] bookings
    ///
    /// # Returns
    /// - `Ok(BookingStatisticsDto)` - Statistics captured now
    /// - `Err(StatisticError::UpstreamFetch)` - Any of the fetches failed, nothing is retried
    /// - `Err(StatisticError::PersonNotFound | StatisticError::ProjectNotFound)` - A booking
    ///   references a record that doesn't exist
    pub async fn calculate_booking_statistics(
        &self,
    ) -> Result<BookingStatisticsDto, StatisticError> {
        let booking_repo = BookingRepository::new(self.db);
        let person_repo = PersonRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);

        let (bookings, persons, projects) = tokio::try_join!(
            booking_repo.get_range(0, STATISTICS_BOOKING_LIMIT),
            person_repo.get_all(),
            project_repo.get_all(),
        )
        .map_err(StatisticError::UpstreamFetch)?;

        let persons: HashMap<_, _> = persons
            .into_iter()
            .map(|person| (person.id, person))
            .collect();
        let projects: HashMap<_, _> = projects
            .into_iter()
            .map(|project| (project.id, project))
            .collect();

        aggregate_booking_statistics(&bookings, &persons, &projects, Utc::now())
    }
}
