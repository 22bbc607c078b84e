pub mod assignment;
pub mod content;
pub mod event;
pub mod group;
pub mod service;
pub mod user;
pub mod video;
