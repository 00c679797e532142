//! Pull request listing pipeline
//!
//! - [`pager`]: walks the paginated listing endpoint
//! - [`matcher`]: keeps pull requests from selected submitters
//! - [`ticket`]: pulls a tracker reference out of the body
//! - [`format`]: renders fixed-width output rows

pub mod format;
pub mod matcher;
pub mod pager;
pub mod ticket;

pub use format::{FormatOptions, FormattedRow, fit_column};
pub use matcher::MatchCriteria;
pub use pager::{ListOptions, PageSummary, PagerError, PullRequestSource, paginate};
pub use ticket::extract_ticket;
