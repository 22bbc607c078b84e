pub use super::assignments::Entity as Assignments;
pub use super::content::Entity as Content;
pub use super::event_calendar::Entity as EventCalendar;
pub use super::group_members::Entity as GroupMembers;
pub use super::group_names::Entity as GroupNames;
pub use super::past_videos::Entity as PastVideos;
pub use super::services::Entity as Services;
pub use super::status::Entity as Status;
pub use super::user_registrations::Entity as UserRegistrations;
pub use super::users::Entity as Users;
pub use super::video_distribution::Entity as VideoDistribution;
