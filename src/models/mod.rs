//! Row types returned by the repositories and the records sent to clients.

pub mod assignment;
pub mod content;
pub mod event;
pub mod group;
pub mod service;
pub mod user;
pub mod video;

pub use assignment::{AssignmentRecord, AssignmentRow, DeadlineFilter};
pub use content::ContentRecord;
pub use event::EventRecord;
pub use group::GroupMemberRow;
pub use service::{RegistrationWithStatus, ServiceRecord, StatusWithService};
pub use user::{NewUser, RegistrationOutcome, UserProfile};
pub use video::{AssignedVideos, VideoRecord, VideoRow};
