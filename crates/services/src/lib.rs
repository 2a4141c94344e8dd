#![forbid(unsafe_code)]

pub mod exercise;
pub mod progression;

pub use exercise::{
    AdvanceOutcome, ExercisePhase, ExerciseProgress, ExerciseResult, ExerciseSession, Rejection,
    SubmitOutcome,
};
pub use progression::ProgressionService;
