// Classification engine: answer tallying, tier ranking, candidate code
// generation, profile matching, and response assembly. Pure functions over
// the loaded reference tables; only the handlers touch the network.

pub mod analyze;
pub mod codes;
pub mod handlers;
pub mod matching;
pub mod ranking;
pub mod scoring;
