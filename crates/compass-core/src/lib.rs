pub mod chat;
pub mod config;
pub mod responses;
pub mod roadmap;

// Re-export main types for convenience
pub use chat::{ChatMessage, ChatWidget, FixedDelay, PendingReply, RandomDelay, ReplyDelay, Sender, QUICK_QUESTIONS};
pub use config::Config;
pub use responses::{classify, topic, Topic};
pub use roadmap::{
    Catalog, Category, Difficulty, FilterAxis, FilterState, Modal, Module, Preview, Roadmap,
    RoadmapBrowser, Timeframe,
};
