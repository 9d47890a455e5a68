mod flatten;
mod markup;

pub use flatten::flatten_elements;
pub use markup::{MarkupAttribute, MarkupElement, MarkupTree};
