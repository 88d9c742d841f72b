mod knowledge_base;
mod oracle;

pub use knowledge_base::KnowledgeBase;
pub use oracle::{solve, solve_with, test};
