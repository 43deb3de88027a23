pub mod jobs;
pub mod plot;
