use crate::output::{DocsIndex, MemberEntry, TypeEntry};
use crate::parser::TypeInfo;
use chrono::Local;
use std::collections::BTreeMap;

/// Assemble the documentation index from the extracted types.
///
/// Sorting is a presentation transform: types by (file path, name), each
/// type's members by (kind, name). Extraction order is preserved upstream.
pub fn build_docs_index(types: Vec<TypeInfo>) -> DocsIndex {
    let total_types = types.len();
    let total_members = types.iter().map(|t| t.members.len()).sum();

    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
    for ty in &types {
        *type_counts.entry(ty.kind.as_str().to_string()).or_insert(0) += 1;
    }

    let mut sorted = types;
    sorted.sort_by(|a, b| {
        (a.file_path.as_str(), a.name.as_str()).cmp(&(b.file_path.as_str(), b.name.as_str()))
    });

    DocsIndex {
        generated_at: Local::now().to_rfc3339(),
        total_types,
        total_members,
        type_counts,
        types: sorted.into_iter().map(type_entry).collect(),
    }
}

fn type_entry(ty: TypeInfo) -> TypeEntry {
    let mut members = ty.members;
    members.sort_by(|a, b| (a.kind, a.name.as_str()).cmp(&(b.kind, b.name.as_str())));

    TypeEntry {
        name: ty.name,
        kind: ty.kind.as_str().to_string(),
        access_modifier: ty.access_modifier,
        modifiers: ty.modifiers,
        file: ty.file_path,
        line: ty.line_number,
        member_count: members.len(),
        members: members
            .into_iter()
            .map(|m| MemberEntry {
                kind: m.kind.as_str().to_string(),
                name: m.name,
                access_modifier: m.access_modifier,
                modifiers: m.modifiers,
                return_type: m.return_type,
                signature: m.signature,
                line: m.line_number,
            })
            .collect(),
    }
}
