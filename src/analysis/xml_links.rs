use crate::output::{DocsIndex, TagLink, XmlLink, XmlLinksOutput};
use chrono::Local;
use eyre::{Result, WrapErr};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// XML tags whose text content commonly references a C# class.
const CLASS_REFERENCE_TAGS: &[&str] = &[
    "verbClass",
    "compClass",
    "defClass",
    "thingClass",
    "jobClass",
    "workType",
    "skillDef",
    "traitDef",
    "hediffDef",
    "abilityDef",
    "class",
    "type",
    "def",
    "operation",
    "patch",
];

const BATCH_SIZE: usize = 50;

/// Load a previously generated documentation index from disk.
pub fn load_index(path: &Path) -> Result<DocsIndex> {
    let content =
        fs::read_to_string(path).wrap_err_with(|| format!("Failed to read index {}", path.display()))?;
    let index = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse index {}", path.display()))?;
    Ok(index)
}

/// Links XML tag values to known C# types using only the index's
/// name-to-file mapping; C# structure is never re-parsed here.
pub struct XmlClassLinker {
    tag_patterns: Vec<(String, Regex)>,
    classes: BTreeMap<String, String>,
}

impl XmlClassLinker {
    pub fn from_index(index: &DocsIndex) -> Result<Self> {
        let mut classes = BTreeMap::new();
        for ty in &index.types {
            classes.insert(ty.name.clone(), ty.file.clone());
        }

        let mut tag_patterns = Vec::with_capacity(CLASS_REFERENCE_TAGS.len());
        for tag in CLASS_REFERENCE_TAGS {
            let re = Regex::new(&format!(r"(?i)<{tag}[^>]*>(.*?)</{tag}>"))?;
            tag_patterns.push((tag.to_string(), re));
        }

        Ok(Self { tag_patterns, classes })
    }

    pub fn known_classes(&self) -> usize {
        self.classes.len()
    }

    /// Scan one XML file line by line for class-reference tags whose trimmed
    /// text equals a known type name.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<XmlLink>> {
        let bytes = fs::read(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let mut links = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            for (tag, re) in &self.tag_patterns {
                for caps in re.captures_iter(line) {
                    let class_name = caps[1].trim();
                    if let Some(file) = self.classes.get(class_name) {
                        links.push(XmlLink {
                            xml_tag: tag.clone(),
                            xml_value: class_name.to_string(),
                            csharp_class: class_name.to_string(),
                            csharp_file: file.clone(),
                            xml_file: path.to_string_lossy().to_string(),
                            xml_line: idx + 1,
                        });
                    }
                }
            }
        }

        Ok(links)
    }

    /// Scan all XML files sequentially, in cosmetic batches, and assemble the
    /// links document. Unreadable files are logged and contribute nothing.
    pub fn link(&self, xml_files: &[PathBuf]) -> XmlLinksOutput {
        let mut all_links = Vec::new();
        let total_batches = xml_files.len().div_ceil(BATCH_SIZE);

        for (batch_idx, batch) in xml_files.chunks(BATCH_SIZE).enumerate() {
            info!("Processing batch {}/{}", batch_idx + 1, total_batches);
            for path in batch {
                match self.scan_file(path) {
                    Ok(links) => all_links.extend(links),
                    Err(err) => warn!("Skipping {}: {err}", path.display()),
                }
            }
        }

        build_output(all_links)
    }
}

fn build_output(all_links: Vec<XmlLink>) -> XmlLinksOutput {
    let unique_classes = all_links
        .iter()
        .map(|l| l.csharp_class.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mut tag_groups: BTreeMap<String, Vec<TagLink>> = BTreeMap::new();
    for link in &all_links {
        tag_groups.entry(link.xml_tag.clone()).or_default().push(TagLink::from(link));
    }

    XmlLinksOutput {
        generated_at: Local::now().to_rfc3339(),
        total_links: all_links.len(),
        unique_classes,
        tag_groups,
        all_links,
    }
}
