pub mod group_repository;
pub mod invite_repository;
pub mod user_repository;
