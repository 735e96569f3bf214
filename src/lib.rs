pub mod bot;
pub mod cli;
pub mod config;
pub mod phonology;
pub mod topic;

pub use bot::PostDraft;
pub use config::Config;
pub use phonology::transform_phrase;
pub use topic::transform_topic;
