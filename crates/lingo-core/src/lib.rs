pub mod acquisition;
pub mod dedup;
pub mod error;
pub mod practice;
pub mod progress;
pub mod session;
pub mod translate;

#[cfg(test)]
mod testing;

pub use acquisition::{AcquisitionPipeline, AcquisitionPolicy, AcquisitionReport, Rejection};
pub use dedup::KnownWords;
pub use error::CoreError;
pub use practice::{PracticeOutcome, PracticeService, match_words};
pub use progress::{ThresholdTable, compute_progress, track_progress};
pub use session::VocabularySession;
pub use translate::translate_text;
