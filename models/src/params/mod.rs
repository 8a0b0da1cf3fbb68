pub mod group;
pub mod location;
pub mod notification;
pub mod tournament;
pub mod user;
