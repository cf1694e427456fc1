// Candidate-to-job matching. Two independent scores coexist and are never
// reconciled: `scorer` computes embedding cosine similarity, `analyzer`
// reports the LLM's own judgement. Callers pick one.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod scorer;
