// Cover letter generation.
// A single templated prompt forwarded through llm_client; no other LLM calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
