mod game;
mod penalty;
mod session;
mod team;

pub use game::Game;
pub use penalty::Penalty;
pub use session::{Session, SESSION_STATUS_ACTIVE, SESSION_STATUS_COMPLETED};
pub use team::Team;

use uuid::Uuid;

/// Short random identifier used as the primary key for every record.
pub fn generate_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::generate_id;

    #[test]
    fn generated_ids_are_short_and_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_eq!(a.len(), 12);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
