pub mod request;
pub mod response;

pub use request::{
    ApiFormat, ChatMessage, ChatRequest, DEFAULT_MODEL_ID, Document, Role, ServingMode,
};
pub use response::ChatResponse;
