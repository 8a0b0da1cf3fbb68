//! `SeaORM` entities for the tournament platform.

pub mod group_members;
pub mod groups;
pub mod locations;
pub mod notifications;
pub mod sea_orm_active_enums;
pub mod tournaments;
pub mod users;
