//! Attendance models.
//!
//! This module defines the [`AttendanceFacts`] consumed by the payslip
//! calculation and the [`DailyAttendance`] records a time tracker produces.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Attendance totals for one employee over one pay period.
///
/// Produced by the time-tracking side and consumed read-only by the
/// payslip calculation. Only `total_hours_worked` and `mins_late` affect
/// money; the day counts and undertime are carried through for reporting.
///
/// # Example
///
/// ```
/// use payslip_engine::models::AttendanceFacts;
/// use rust_decimal::Decimal;
///
/// let facts = AttendanceFacts {
///     total_hours_worked: Decimal::new(176, 0),
///     regular_days: 22,
///     ..AttendanceFacts::default()
/// };
/// assert_eq!(facts.mins_late, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceFacts {
    /// Hours actually worked in the period. Must not be negative.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_hours_worked: Decimal,
    /// Total minutes late across the period.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mins_late: u32,
    /// Days the employee was present.
    #[serde(default, deserialize_with = "null_as_default")]
    pub regular_days: u32,
    /// Days the employee was absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub absent_days: u32,
    /// Total minutes of undertime across the period.
    #[serde(default, deserialize_with = "null_as_default")]
    pub undertime_minutes: u32,
}

/// How a single day counts towards attendance totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee reported for work.
    Present,
    /// The employee was expected but did not report.
    Absent,
    /// A scheduled rest day.
    RestDay,
    /// An approved leave day.
    Leave,
}

/// One day of attendance as recorded by a time tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// How the day counts.
    pub status: AttendanceStatus,
    /// Hours worked on the day, net of breaks.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours_worked: Decimal,
    /// Minutes late on the day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mins_late: u32,
    /// Minutes of undertime on the day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub undertime_minutes: u32,
}
