use crate::db::models::topics::Topic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicResponse {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicsEnvelope {
    pub topics: Vec<TopicResponse>,
}

impl From<Topic> for TopicResponse {
    fn from(record: Topic) -> Self {
        Self {
            slug: record.slug,
            description: record.description,
        }
    }
}
