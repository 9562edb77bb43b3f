// Weight-space controller: the user's skills / compensation / culture split,
// the triangle geometry used to pick it, persistence, and the re-ranker that
// orders match results by it.

pub mod geometry;
pub mod handlers;
pub mod reranker;
pub mod stepping;
pub mod store;
pub mod weights;
