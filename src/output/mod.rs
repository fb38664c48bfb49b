pub mod format;
pub mod types;

pub use format::{output, should_use_json, write_json};
pub use types::{
    DocsIndex, DocsSummary, LinkedCall, MemberEntry, TagLink, TranslationsOutput, TranslationsSummary, TypeEntry,
    UnlinkedCall, XmlLink, XmlLinksOutput, XmlLinksSummary,
};
