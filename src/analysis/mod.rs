pub mod docs;
pub mod translations;
pub mod xml_links;

pub use docs::build_docs_index;
pub use translations::{TranslateCall, TranslationLinker};
pub use xml_links::{load_index, XmlClassLinker};
