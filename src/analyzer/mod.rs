mod gemini;
pub mod mock;
mod parser;
mod prompt;
mod schema;

pub use gemini::GeminiClient;
pub use parser::{extract_json, parse_analysis_response};
pub use prompt::build_analysis_prompt;
pub use schema::response_schema;
