//! Field metadata for declared record types.
//!
//! Record types describe their fields with a static [`FieldDecl`] table
//! (generated by `#[derive(Record)]`). The engine turns that table into a
//! [`TypeDescriptor`] once per (type, [`FieldMapper`]) pair and serves every
//! later lookup from a process-wide cache.

mod cache;
pub use cache::resolve;

mod decl;
pub use decl::FieldDecl;

mod descriptor;
pub use descriptor::TypeDescriptor;

mod field;
pub use field::FieldDescriptor;

mod field_mapper;
pub use field_mapper::FieldMapper;

mod field_opts;
pub use field_opts::{FieldOpts, OPT_OMIT_EMPTY, OPT_WITH_QUOTE};

mod view;
pub use view::TaggedView;
