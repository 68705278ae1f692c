pub mod dto;
pub mod error;
pub mod service;

pub use dto::{PodcastEpisode, PodcastRequest, PodcastResponse};
pub use error::PodcastServiceError;
pub use service::{PodcastService, PodcastServiceApi};
