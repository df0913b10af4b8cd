//! Manifest mutation engine
//!
//! Everything in this module is a pure text transformation: the manifest
//! comes in as a `&str`, the rewritten manifest goes out as a `String`, and
//! no I/O happens anywhere in between. The CLI driver owns reading and
//! (atomically) writing the file.

pub mod edit;
pub mod error;
pub mod ident;
pub mod mutator;
pub mod section;

pub use edit::EditList;
pub use error::ProjectError;
pub use ident::IdGenerator;
pub use mutator::{register_files, AddedFile, Mutation};
pub use section::{locate_section, locate_sources_list, SectionSpan};
