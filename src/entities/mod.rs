pub mod prelude;

pub mod assignments;
pub mod content;
pub mod event_calendar;
pub mod group_members;
pub mod group_names;
pub mod past_videos;
pub mod services;
pub mod status;
pub mod user_registrations;
pub mod users;
pub mod video_distribution;
