pub mod query_ctx;
pub mod weights;

pub use query_ctx::QueryContext;
pub use weights::WeightTable;
