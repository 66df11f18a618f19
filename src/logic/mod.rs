//! Tournament business logic: standings computation and round pairing.

mod pairing;
mod standings;

pub use pairing::next_round;
pub use standings::compute_standings;
