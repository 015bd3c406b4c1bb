//! Shared data contracts between the back-office frontend and the menu
//! engineering API, plus the pure analytics computations that both the
//! chart layer and the tests exercise.

pub mod analytics;
pub mod domain;
pub mod shared;
