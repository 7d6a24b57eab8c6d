use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::statistic::{BookingStatisticsDto, ChartSeriesDto, MultiChartSeriesDto},
    server::{
        error::statistic::StatisticError,
        model::db::{BookingModel, PersonModel, ProjectModel},
        util::time::{format_work_day, work_time_hours},
    },
};

/// Sums hours per label while remembering the order labels were first seen in
#[derive(Default)]
struct HoursAccumulator {
    labels: Vec<String>,
    hours: Vec<i64>,
    index: HashMap<String, usize>,
}

impl HoursAccumulator {
    fn add(&mut self, label: String, hours: i64) {
        match self.index.get(&label) {
            Some(&i) => self.hours[i] += hours,
            None => {
                self.index.insert(label.clone(), self.labels.len());
                self.labels.push(label);
                self.hours.push(hours);
            }
        }
    }

    fn into_series(self) -> ChartSeriesDto {
        ChartSeriesDto {
            labels: self.labels,
            data: self.hours,
        }
    }
}

/// Groups the worked hours of `bookings` by work day, project name & employee name
///
/// Every booking contributes its whole worked hours (see [`work_time_hours`]) to one
/// label of each series. Labels appear in the order they are first encountered, the
/// day series carries its values as a single nested series.
///
/// # Arguments
/// - `bookings` - Bookings to aggregate
/// - `persons` - Persons by ID, every booking's person has to be present
/// - `projects` - Projects by ID, every booking's project has to be present
/// - `captured_at` - Time reported as the statistics timestamp
///
/// # Returns
/// - `Ok(BookingStatisticsDto)` - The aggregated statistics
/// - `Err(StatisticError::PersonNotFound)` - A booking references a person missing from `persons`
/// - `Err(StatisticError::ProjectNotFound)` - A booking references a project missing from `projects`
pub fn aggregate_booking_statistics(
    bookings: &[BookingModel],
    persons: &HashMap<i32, PersonModel>,
    projects: &HashMap<i32, ProjectModel>,
    captured_at: DateTime<Utc>,
) -> Result<BookingStatisticsDto, StatisticError> {
    let mut hours_day = HoursAccumulator::default();
    let mut hours_project = HoursAccumulator::default();
    let mut hours_employee = HoursAccumulator::default();

    for booking in bookings {
        let person = persons
            .get(&booking.person_id)
            .ok_or(StatisticError::PersonNotFound {
                booking_id: booking.id,
                person_id: booking.person_id,
            })?;
        let project = projects
            .get(&booking.project_id)
            .ok_or(StatisticError::ProjectNotFound {
                booking_id: booking.id,
                project_id: booking.project_id,
            })?;

        let hours = work_time_hours(booking.work_started, booking.work_finished, booking.pause);

        hours_day.add(format_work_day(booking.work_day), hours);
        hours_project.add(project.name.clone(), hours);
        hours_employee.add(format!("{} {}", person.forename, person.surname), hours);
    }

    let hours_day = hours_day.into_series();

    Ok(BookingStatisticsDto {
        timestamp: captured_at.timestamp_millis(),
        total_entries: bookings.len(),
        hours_day: MultiChartSeriesDto {
            labels: hours_day.labels,
            data: vec![hours_day.data],
        },
        hours_project: hours_project.into_series(),
        hours_employee: hours_employee.into_series(),
    })
}
