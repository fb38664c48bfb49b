use crate::output::{LinkedCall, TranslationsOutput, UnlinkedCall};
use chrono::Local;
use eyre::{Result, WrapErr};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Element/attribute names whose values are taken as translation keys
/// regardless of shape.
const KEY_NAME_ALLOWLIST: &[&str] = &["key", "defname", "label", "description", "text"];

const CS_BATCH_SIZE: usize = 100;
const XML_BATCH_SIZE: usize = 50;

/// One `.Translate(...)` call site found in C# source.
#[derive(Debug, Clone)]
pub struct TranslateCall {
    pub translation_key: String,
    pub csharp_file: String,
    pub csharp_line: usize,
    pub csharp_code: String,
}

/// Cross-references localization call sites in C# against translation keys
/// harvested from XML.
pub struct TranslationLinker {
    call_re: Regex,
    element_re: Regex,
    attribute_re: Regex,
}

impl TranslationLinker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Quoted key or identifier receiver; the argument list must be
            // non-empty (calls with actual replacements).
            call_re: Regex::new(r#"["']([^"']+)["']\.Translate\([^)]+\)|(\w+)\.Translate\([^)]+\)"#)?,
            // The regex engine has no backreferences; the open/close name
            // match is checked in code.
            element_re: Regex::new(r"<(\w+)>([^<]+)</(\w+)>")?,
            attribute_re: Regex::new(r#"(\w+)="([^"]+)""#)?,
        })
    }

    /// Find all `.Translate(...)` call sites across the given C# files,
    /// sequentially, in cosmetic batches.
    pub fn find_translate_calls(&self, cs_files: &[PathBuf]) -> Vec<TranslateCall> {
        let mut calls = Vec::new();
        let total_batches = cs_files.len().div_ceil(CS_BATCH_SIZE);

        for (batch_idx, batch) in cs_files.chunks(CS_BATCH_SIZE).enumerate() {
            info!("Processing batch {}/{}", batch_idx + 1, total_batches);
            for path in batch {
                match self.scan_cs_file(path) {
                    Ok(found) => calls.extend(found),
                    Err(err) => warn!("Skipping {}: {err}", path.display()),
                }
            }
        }

        calls
    }

    fn scan_cs_file(&self, path: &Path) -> Result<Vec<TranslateCall>> {
        let bytes = fs::read(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let mut calls = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            for caps in self.call_re.captures_iter(line) {
                // The quoted capture wins over the identifier capture.
                let key = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
                if let Some(key) = key {
                    calls.push(TranslateCall {
                        translation_key: key.to_string(),
                        csharp_file: path.to_string_lossy().to_string(),
                        csharp_line: idx + 1,
                        csharp_code: line.trim().to_string(),
                    });
                }
            }
        }

        Ok(calls)
    }

    /// Harvest candidate translation keys from XML files, mapping each key to
    /// the files that define it.
    pub fn collect_xml_keys(&self, xml_files: &[PathBuf]) -> BTreeMap<String, Vec<String>> {
        let mut key_to_files: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let total_batches = xml_files.len().div_ceil(XML_BATCH_SIZE);

        for (batch_idx, batch) in xml_files.chunks(XML_BATCH_SIZE).enumerate() {
            info!("Scanning XML batch {}/{}", batch_idx + 1, total_batches);
            for path in batch {
                match self.scan_xml_file(path) {
                    Ok(keys) => {
                        for key in keys {
                            key_to_files
                                .entry(key)
                                .or_default()
                                .push(path.to_string_lossy().to_string());
                        }
                    }
                    Err(err) => warn!("Skipping {}: {err}", path.display()),
                }
            }
        }

        key_to_files
    }

    /// Keys found in one XML file, deduplicated.
    fn scan_xml_file(&self, path: &Path) -> Result<BTreeSet<String>> {
        let bytes = fs::read(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let mut keys = BTreeSet::new();

        for caps in self.element_re.captures_iter(&content) {
            if caps[1] == caps[3] && is_translation_key(&caps[1], &caps[2]) {
                keys.insert(caps[2].to_string());
            }
        }
        for caps in self.attribute_re.captures_iter(&content) {
            if is_translation_key(&caps[1], &caps[2]) {
                keys.insert(caps[2].to_string());
            }
        }

        Ok(keys)
    }

    /// Join call sites to the XML files defining their keys.
    pub fn link(
        &self,
        calls: Vec<TranslateCall>,
        xml_keys: BTreeMap<String, Vec<String>>,
    ) -> TranslationsOutput {
        let unique_translation_keys = calls
            .iter()
            .map(|c| c.translation_key.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        let mut translation_links: BTreeMap<String, Vec<LinkedCall>> = BTreeMap::new();
        let mut unlinked_csharp_calls = Vec::new();

        for call in &calls {
            match xml_keys.get(&call.translation_key) {
                Some(files) => {
                    translation_links
                        .entry(call.translation_key.clone())
                        .or_default()
                        .push(LinkedCall {
                            csharp_file: call.csharp_file.clone(),
                            csharp_line: call.csharp_line,
                            csharp_code: call.csharp_code.clone(),
                            xml_files: files.clone(),
                        });
                }
                None => unlinked_csharp_calls.push(UnlinkedCall {
                    translation_key: call.translation_key.clone(),
                    csharp_file: call.csharp_file.clone(),
                    csharp_line: call.csharp_line,
                    csharp_code: call.csharp_code.clone(),
                }),
            }
        }

        TranslationsOutput {
            generated_at: Local::now().to_rfc3339(),
            total_translate_calls: calls.len(),
            unique_translation_keys,
            linked_translations: translation_links.len(),
            translation_links,
            unlinked_csharp_calls,
        }
    }
}

/// A candidate is a translation key when its element/attribute name is on
/// the allowlist, or its value looks like label text rather than markup or
/// a bare number.
fn is_translation_key(name: &str, value: &str) -> bool {
    KEY_NAME_ALLOWLIST.contains(&name.to_lowercase().as_str())
        || (!value.is_empty() && !value.starts_with('{') && !value.chars().all(|c| c.is_ascii_digit()))
}
