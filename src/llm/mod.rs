pub mod client;
pub mod gateway;
pub mod openai;
pub mod types;
pub mod workers_ai;

pub use client::*;
pub use gateway::*;
pub use openai::*;
pub use types::*;
pub use workers_ai::*;
