pub mod users;
pub mod runs;
