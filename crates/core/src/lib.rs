//! # LessonBook Core
//!
//! Domain types and the booking rule for the college timetable.
//!
//! A new lesson is only ever added through [`admission::try_admit`], which refuses
//! any candidate that would double-book a group, a teacher or a classroom on the
//! same date. [`session::BookingSession`] wires the rule to a
//! [`repository::ScheduleRepository`] so that admitted lessons are staged right
//! away and written out on an explicit save.

pub mod admission;
pub mod errors;
pub mod models;
pub mod repository;
pub mod session;
