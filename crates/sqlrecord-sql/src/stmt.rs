//! Statement builders.
//!
//! Builders accumulate already-resolved column names and values; they do not
//! quote identifiers. Call `build` to render SQL for the builder's flavor.

mod delete;
pub use delete::DeleteBuilder;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::{InsertBuilder, InsertVerb};

mod select;
pub use select::SelectBuilder;

mod update;
pub use update::UpdateBuilder;
