pub mod commit;
pub mod report;

pub use commit::CommitRecord;
pub use report::{DateRange, Report};
