use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ChatReply {
    pub reply: String,
}
