use serde::{Deserialize, Serialize};

/// Booked hours grouped by one dimension, `labels[i]` names the group of `data[i]`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChartSeriesDto {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

/// Like [`ChartSeriesDto`] but `data` holds a list of series sharing the labels
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MultiChartSeriesDto {
    pub labels: Vec<String>,
    pub data: Vec<Vec<i64>>,
}

/// Aggregated booking statistics
///
/// ```json
/// {
///   "timestamp": 1700000000000,
///   "totalEntries": 2,
///   "hoursDay": { "labels": ["3/3/2000"], "data": [[13]] },
///   "hoursProject": { "labels": ["P1"], "data": [13] },
///   "hoursEmployee": { "labels": ["Jane Doe"], "data": [13] }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatisticsDto {
    /// Capture time in milliseconds since the Unix epoch
    pub timestamp: i64,
    pub total_entries: usize,
    pub hours_day: MultiChartSeriesDto,
    pub hours_project: ChartSeriesDto,
    pub hours_employee: ChartSeriesDto,
}
