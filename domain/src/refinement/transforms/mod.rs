//! Built-in transformations, one per [`Intent`](super::Intent).

mod add_scripture;
mod generic;
mod lengthen;
mod shorten;
mod simplify;

pub use add_scripture::AddScriptureTransformation;
pub use generic::GenericRevisionTransformation;
pub use lengthen::LengthenTransformation;
pub use shorten::ShortenTransformation;
pub use simplify::{SimplifyTransformation, VOCABULARY};
