//! Extension-bucketed copier: sorts every file of a tree into
//! `<dest>/<extension>/`.

mod copier;
mod extension;

pub use copier::{
    CopiedFile, SortOptions, SortReport, copy_preserving_metadata, sort_tree, unique_destination,
    validate_source,
};
pub use extension::{NO_EXTENSION, extension_of};
