pub mod scoring;
pub mod standings;
pub mod team_identity;
pub mod transfer;
