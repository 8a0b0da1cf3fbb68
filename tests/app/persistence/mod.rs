pub mod group;
pub mod notification;
pub mod repository;
pub mod user;
