//! Attendance summary.
//!
//! Folds a time tracker's daily records into the [`AttendanceFacts`] a payslip
//! is computed from.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AttendanceFacts, AttendanceStatus, DailyAttendance};

use super::arithmetic::overflow;
use super::validation::validate_non_negative;

/// Summarizes daily attendance records into period totals.
///
/// Hours, minutes late and undertime are summed over every record. Present
/// days count as regular days and absent days as absent days; rest days and
/// leave count as neither.
///
/// # Errors
///
/// - `Validation` if a record has negative hours, naming `records[i].hours_worked`
/// - `CalculationError` if a total overflows
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::summarize_attendance;
/// use payslip_engine::models::{AttendanceStatus, DailyAttendance};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     DailyAttendance {
///         date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///         status: AttendanceStatus::Present,
///         hours_worked: Decimal::new(8, 0),
///         mins_late: 12,
///         undertime_minutes: 0,
///     },
///     DailyAttendance {
///         date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
///         status: AttendanceStatus::Absent,
///         hours_worked: Decimal::ZERO,
///         mins_late: 0,
///         undertime_minutes: 0,
///     },
/// ];
///
/// let facts = summarize_attendance(&records).unwrap();
/// assert_eq!(facts.total_hours_worked, Decimal::new(8, 0));
/// assert_eq!(facts.mins_late, 12);
/// assert_eq!(facts.regular_days, 1);
/// assert_eq!(facts.absent_days, 1);
/// ```
pub fn summarize_attendance(records: &[DailyAttendance]) -> EngineResult<AttendanceFacts> {
    let mut facts = AttendanceFacts::default();

    for (i, record) in records.iter().enumerate() {
        validate_non_negative(&format!("records[{}].hours_worked", i), record.hours_worked)?;

        facts.total_hours_worked = facts
            .total_hours_worked
            .checked_add(record.hours_worked)
            .ok_or_else(|| overflow("total_hours_worked"))?;
        facts.mins_late = facts
            .mins_late
            .checked_add(record.mins_late)
            .ok_or_else(|| overflow("mins_late"))?;
        facts.undertime_minutes = facts
            .undertime_minutes
            .checked_add(record.undertime_minutes)
            .ok_or_else(|| overflow("undertime_minutes"))?;

        match record.status {
            AttendanceStatus::Present => facts.regular_days += 1,
            AttendanceStatus::Absent => facts.absent_days += 1,
            AttendanceStatus::RestDay | AttendanceStatus::Leave => {}
        }
    }

    Ok(facts)
}
