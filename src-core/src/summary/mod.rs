//! Daily summary: aggregation over current state, HTML rendering, SMTP
//! delivery and the scheduler tick computation.

pub mod email;
pub mod format;
pub mod scheduler;
pub mod summary_model;
pub mod summary_service;

pub use email::{EmailSender, SmtpConfig};
pub use format::format_summary_email;
pub use scheduler::seconds_until_next_run;
pub use summary_model::{ActionItem, ActionKind, DailySummary};
pub use summary_service::{build_summary, SummaryService};
