// LaTeX resume documents: templates, structural validation, compilation to PDF,
// editor utilities, and AI-assisted editing through llm_client.

pub mod assist;
pub mod compiler;
pub mod document;
pub mod escape;
pub mod format;
pub mod handlers;
pub mod prompts;
pub mod starter;
pub mod templates;
pub mod validation;
