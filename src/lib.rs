pub mod batch;
pub mod error;
pub mod fixer;
pub mod io;
pub mod models;

pub use batch::{BatchConfig, BatchReport, FileReport, FileStatus, InspectStatus, inspect_batch, run_batch};
pub use error::FixError;
pub use fixer::{FixOutcome, Transformation, fix_file, inspect_file, transform};
pub use io::{detect_delimiter, parse_transcript, render_canonical};
pub use models::{Delimiter, HeaderRecord, TranscriptRow};
