pub mod data;
pub mod games;
pub mod sessions;
pub mod settings;
pub mod stats;
pub mod teams;
