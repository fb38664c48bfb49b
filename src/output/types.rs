use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The primary documentation index document.
///
/// This is the sole interface the link passes consume: they read
/// `types[].name`/`file` and never re-parse C# structure, so the document is
/// deserializable as well.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocsIndex {
    pub generated_at: String,
    pub total_types: usize,
    pub total_members: usize,
    pub type_counts: BTreeMap<String, usize>,
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name: String,
    pub kind: String,
    pub access_modifier: String,
    pub modifiers: Vec<String>,
    pub file: String,
    pub line: usize,
    pub member_count: usize,
    pub members: Vec<MemberEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberEntry {
    pub kind: String,
    pub name: String,
    pub access_modifier: String,
    pub modifiers: Vec<String>,
    pub return_type: Option<String>,
    pub signature: String,
    pub line: usize,
}

/// XML-tag-to-type links document.
#[derive(Debug, Serialize)]
pub struct XmlLinksOutput {
    pub generated_at: String,
    pub total_links: usize,
    pub unique_classes: usize,
    /// Links grouped by tag, without the redundant tag field per entry.
    pub tag_groups: BTreeMap<String, Vec<TagLink>>,
    pub all_links: Vec<XmlLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct XmlLink {
    pub xml_tag: String,
    pub xml_value: String,
    pub csharp_class: String,
    pub csharp_file: String,
    pub xml_file: String,
    pub xml_line: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagLink {
    pub xml_value: String,
    pub csharp_class: String,
    pub csharp_file: String,
    pub xml_file: String,
    pub xml_line: usize,
}

impl From<&XmlLink> for TagLink {
    fn from(link: &XmlLink) -> Self {
        Self {
            xml_value: link.xml_value.clone(),
            csharp_class: link.csharp_class.clone(),
            csharp_file: link.csharp_file.clone(),
            xml_file: link.xml_file.clone(),
            xml_line: link.xml_line,
        }
    }
}

/// Localization cross-reference document.
#[derive(Debug, Serialize)]
pub struct TranslationsOutput {
    pub generated_at: String,
    pub total_translate_calls: usize,
    pub unique_translation_keys: usize,
    pub linked_translations: usize,
    /// Key -> call sites, each carrying the XML files that define the key.
    pub translation_links: BTreeMap<String, Vec<LinkedCall>>,
    pub unlinked_csharp_calls: Vec<UnlinkedCall>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkedCall {
    pub csharp_file: String,
    pub csharp_line: usize,
    pub csharp_code: String,
    pub xml_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnlinkedCall {
    pub translation_key: String,
    pub csharp_file: String,
    pub csharp_line: usize,
    pub csharp_code: String,
}

/// Stdout summary for the docs command.
#[derive(Debug, Serialize)]
pub struct DocsSummary {
    pub output: String,
    pub total_types: usize,
    pub total_members: usize,
    pub type_counts: BTreeMap<String, usize>,
}

/// Stdout summary for the xml-links command.
#[derive(Debug, Serialize)]
pub struct XmlLinksSummary {
    pub output: String,
    pub total_links: usize,
    pub unique_classes: usize,
    pub links_by_tag: BTreeMap<String, usize>,
}

/// Stdout summary for the translations command.
#[derive(Debug, Serialize)]
pub struct TranslationsSummary {
    pub output: String,
    pub total_translate_calls: usize,
    pub unique_translation_keys: usize,
    pub linked_translations: usize,
}
