use eyre::{Result, WrapErr};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
        }
    }
}

/// Kind of a declared member. Variants are declared in the lexicographic
/// order of their wire names so that deriving `Ord` matches the sort order
/// of the serialized documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MemberKind {
    Constructor,
    EnumValue,
    Event,
    Field,
    Method,
    Property,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Constructor => "constructor",
            MemberKind::EnumValue => "enum_value",
            MemberKind::Event => "event",
            MemberKind::Field => "field",
            MemberKind::Method => "method",
            MemberKind::Property => "property",
        }
    }
}

/// One declared member of a type. Created while its type is open and
/// appended immediately; never mutated afterward.
#[derive(Debug, Clone)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    /// The comment-stripped, trimmed source line the member was recognized on.
    pub signature: String,
    pub access_modifier: String,
    /// Modifier tokens with the access modifier always first.
    pub modifiers: Vec<String>,
    /// Absent for constructors and enum values.
    pub return_type: Option<String>,
    pub line_number: usize,
}

/// One declared class, interface, struct, or enum with its members in
/// discovery order.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub name: String,
    pub kind: TypeKind,
    pub access_modifier: String,
    pub modifiers: Vec<String>,
    pub file_path: String,
    pub line_number: usize,
    pub members: Vec<Member>,
}

/// Line-oriented structural extractor for C# source.
///
/// Operates strictly line by line with a brace-depth counter as the only
/// "inside a type body" signal. Type declarations must carry an access
/// modifier; interface members and enum values are implicitly public. This
/// is a heuristic scanner, not a parser: multi-line signatures, block
/// comments, and braces inside string literals are not understood, and a
/// nested type declaration silently replaces the current type rather than
/// stacking.
pub struct CsParser {
    class_re: Regex,
    interface_re: Regex,
    struct_re: Regex,
    enum_re: Regex,
    constructor_re: Regex,
    method_re: Regex,
    property_re: Regex,
    field_re: Regex,
    event_re: Regex,
    enum_value_re: Regex,
    iface_method_re: Regex,
    iface_property_re: Regex,
    iface_event_re: Regex,
}

const ACCESS: &str = "(public|internal|protected|private)";
const TYPE_TOKEN: &str = r"[A-Za-z_]\w*(?:\[\])?\??";

impl CsParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            class_re: Regex::new(&format!(
                r"^{ACCESS}\s+((?:(?:static|sealed|abstract|partial)\s+)*)class\s+([A-Za-z_]\w*)"
            ))?,
            interface_re: Regex::new(&format!(
                r"^{ACCESS}\s+((?:partial\s+)*)interface\s+([A-Za-z_]\w*)"
            ))?,
            struct_re: Regex::new(&format!(
                r"^{ACCESS}\s+((?:(?:partial|readonly)\s+)*)struct\s+([A-Za-z_]\w*)"
            ))?,
            enum_re: Regex::new(&format!(r"^{ACCESS}\s+enum\s+([A-Za-z_]\w*)"))?,
            constructor_re: Regex::new(&format!(r"^{ACCESS}\s+(?:(static)\s+)?([A-Za-z_]\w*)\s*\("))?,
            method_re: Regex::new(&format!(
                r"^{ACCESS}\s+((?:(?:static|virtual|override|abstract|sealed|new|async)\s+)*)({TYPE_TOKEN})\s+([A-Za-z_]\w*)\s*\("
            ))?,
            property_re: Regex::new(&format!(
                r"^{ACCESS}\s+((?:(?:static|virtual|override|abstract|sealed|new)\s+)*)({TYPE_TOKEN})\s+([A-Za-z_]\w*)\s*\{{"
            ))?,
            // No const in the modifier set: constant declarations are never fields.
            field_re: Regex::new(&format!(
                r"^{ACCESS}\s+((?:(?:static|readonly|volatile)\s+)*)({TYPE_TOKEN})\s+([A-Za-z_]\w*)\s*[=;]"
            ))?,
            event_re: Regex::new(&format!(
                r"^{ACCESS}\s+((?:(?:static|virtual|override|abstract|sealed|new)\s+)*)event\s+({TYPE_TOKEN})\s+([A-Za-z_]\w*)"
            ))?,
            enum_value_re: Regex::new(r"^([A-Za-z_]\w*)\s*(?:=\s*[^,}]+)?\s*[,}]?")?,
            iface_method_re: Regex::new(&format!(r"^({TYPE_TOKEN})\s+([A-Za-z_]\w*)\s*\("))?,
            iface_property_re: Regex::new(&format!(r"^({TYPE_TOKEN})\s+([A-Za-z_]\w*)\s*\{{"))?,
            iface_event_re: Regex::new(&format!(r"^event\s+({TYPE_TOKEN})\s+([A-Za-z_]\w*)"))?,
        })
    }

    /// Read a C# file and extract the types it declares. Invalid UTF-8 is
    /// replaced rather than treated as an error.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<TypeInfo>> {
        let bytes = fs::read(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(self.parse_source(&source, &path.to_string_lossy()))
    }

    /// Extract the ordered list of types declared in `source`, each populated
    /// with its members in discovery order.
    pub fn parse_source(&self, source: &str, file_path: &str) -> Vec<TypeInfo> {
        let mut types: Vec<TypeInfo> = Vec::new();
        // Index of the currently open type, if any. Reassigned on every
        // recognized type declaration; nested declarations replace it.
        let mut current: Option<usize> = None;
        let mut depth: i32 = 0;

        for (idx, raw) in source.lines().enumerate() {
            let line_number = idx + 1;
            let stripped = strip_comments(raw);
            if stripped.is_empty() {
                continue;
            }

            depth += brace_delta(stripped);

            if let Some(ty) = self.match_type_decl(stripped, file_path, line_number) {
                types.push(ty);
                current = Some(types.len() - 1);
                continue;
            }

            if depth > 0 {
                if let Some(i) = current {
                    let ty = &mut types[i];
                    if let Some(member) = self.match_member(stripped, ty.kind, &ty.name, line_number) {
                        ty.members.push(member);
                    }
                }
            }
        }

        types
    }

    /// Try the type-declaration patterns in priority order; the first match
    /// wins and the line is consumed.
    fn match_type_decl(&self, line: &str, file_path: &str, line_number: usize) -> Option<TypeInfo> {
        let keyword_patterns = [
            (&self.class_re, TypeKind::Class),
            (&self.interface_re, TypeKind::Interface),
            (&self.struct_re, TypeKind::Struct),
        ];

        for (re, kind) in keyword_patterns {
            if let Some(caps) = re.captures(line) {
                let access = caps[1].to_string();
                return Some(TypeInfo {
                    name: caps[3].to_string(),
                    kind,
                    access_modifier: access.clone(),
                    modifiers: modifier_list(&access, &caps[2]),
                    file_path: file_path.to_string(),
                    line_number,
                    members: Vec::new(),
                });
            }
        }

        let caps = self.enum_re.captures(line)?;
        let access = caps[1].to_string();
        Some(TypeInfo {
            name: caps[2].to_string(),
            kind: TypeKind::Enum,
            access_modifier: access.clone(),
            modifiers: vec![access],
            file_path: file_path.to_string(),
            line_number,
            members: Vec::new(),
        })
    }

    /// Try the member patterns applicable to the open type's kind, first
    /// success wins. A line matching none of them is ordinary body code.
    fn match_member(&self, line: &str, kind: TypeKind, type_name: &str, line_number: usize) -> Option<Member> {
        match kind {
            TypeKind::Enum => self.match_enum_value(line, line_number),
            TypeKind::Class | TypeKind::Struct => self.match_class_member(line, type_name, line_number),
            TypeKind::Interface => self.match_interface_member(line, line_number),
        }
    }

    fn match_enum_value(&self, line: &str, line_number: usize) -> Option<Member> {
        let caps = self.enum_value_re.captures(line)?;
        let name = caps.get(1)?.as_str();
        if name.contains('(') || name.trim().is_empty() {
            return None;
        }
        Some(Member {
            kind: MemberKind::EnumValue,
            name: name.to_string(),
            signature: line.to_string(),
            access_modifier: "public".to_string(),
            modifiers: vec!["public".to_string()],
            return_type: None,
            line_number,
        })
    }

    fn match_class_member(&self, line: &str, type_name: &str, line_number: usize) -> Option<Member> {
        // A constructor only counts when the identifier equals the open
        // type's name; otherwise the line falls through to the other shapes.
        if let Some(caps) = self.constructor_re.captures(line) {
            if &caps[3] == type_name {
                let access = caps[1].to_string();
                let mut modifiers = vec![access.clone()];
                if caps.get(2).is_some() {
                    modifiers.push("static".to_string());
                }
                return Some(Member {
                    kind: MemberKind::Constructor,
                    name: type_name.to_string(),
                    signature: line.to_string(),
                    access_modifier: access,
                    modifiers,
                    return_type: None,
                    line_number,
                });
            }
        }

        if let Some(caps) = self.method_re.captures(line) {
            return Some(member_with_type(MemberKind::Method, &caps, line, line_number));
        }
        if let Some(caps) = self.property_re.captures(line) {
            return Some(member_with_type(MemberKind::Property, &caps, line, line_number));
        }
        if let Some(caps) = self.field_re.captures(line) {
            return Some(member_with_type(MemberKind::Field, &caps, line, line_number));
        }
        if let Some(caps) = self.event_re.captures(line) {
            return Some(member_with_type(MemberKind::Event, &caps, line, line_number));
        }

        None
    }

    fn match_interface_member(&self, line: &str, line_number: usize) -> Option<Member> {
        let (kind, caps) = if let Some(caps) = self.iface_method_re.captures(line) {
            (MemberKind::Method, caps)
        } else if let Some(caps) = self.iface_property_re.captures(line) {
            (MemberKind::Property, caps)
        } else if let Some(caps) = self.iface_event_re.captures(line) {
            (MemberKind::Event, caps)
        } else {
            return None;
        };

        Some(Member {
            kind,
            name: caps[2].to_string(),
            signature: line.to_string(),
            // No modifier token in source, but implicitly public.
            access_modifier: "public".to_string(),
            modifiers: vec!["public".to_string()],
            return_type: Some(caps[1].to_string()),
            line_number,
        })
    }
}

/// Build a member whose captures follow the (access, modifier run, type,
/// name) shape shared by the method/property/field/event patterns.
fn member_with_type(kind: MemberKind, caps: &regex::Captures, line: &str, line_number: usize) -> Member {
    let access = caps[1].to_string();
    Member {
        kind,
        name: caps[4].to_string(),
        signature: line.to_string(),
        modifiers: modifier_list(&access, &caps[2]),
        access_modifier: access,
        return_type: Some(caps[3].to_string()),
        line_number,
    }
}

/// Access modifier first, then the optional modifier tokens in source order.
fn modifier_list(access: &str, run: &str) -> Vec<String> {
    let mut modifiers = vec![access.to_string()];
    modifiers.extend(run.split_whitespace().map(str::to_string));
    modifiers
}

/// Strip everything from the first `//` onward, then trim.
fn strip_comments(line: &str) -> &str {
    match line.find("//") {
        Some(i) => line[..i].trim(),
        None => line.trim(),
    }
}

/// Net brace count of a stripped line. Braces inside string literals and
/// block comments are counted too; that desynchronization is an accepted
/// limitation of the heuristic.
fn brace_delta(line: &str) -> i32 {
    let opens = line.matches('{').count() as i32;
    let closes = line.matches('}').count() as i32;
    opens - closes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CsParser {
        CsParser::new().unwrap()
    }

    fn parse(source: &str) -> Vec<TypeInfo> {
        parser().parse_source(source, "Test.cs")
    }

    #[test]
    fn test_class_declaration_basic() {
        let types = parse("public class Foo\n{\n}\n");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Foo");
        assert_eq!(types[0].kind, TypeKind::Class);
        assert_eq!(types[0].access_modifier, "public");
        assert_eq!(types[0].modifiers, vec!["public"]);
        assert_eq!(types[0].line_number, 1);
        assert_eq!(types[0].file_path, "Test.cs");
    }

    #[test]
    fn test_class_declaration_with_modifiers() {
        let types = parse("internal abstract partial class Widget\n{\n}\n");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].access_modifier, "internal");
        assert_eq!(types[0].modifiers, vec!["internal", "abstract", "partial"]);
    }

    #[test]
    fn test_class_without_access_modifier_is_ignored() {
        let types = parse("class Foo\n{\n}\n");
        assert!(types.is_empty());
    }

    #[test]
    fn test_modifier_order_preserved() {
        let types = parse("public static sealed class Registry\n{\n}\n");
        assert_eq!(types[0].modifiers, vec!["public", "static", "sealed"]);
    }

    #[test]
    fn test_interface_declaration() {
        let types = parse("public partial interface IThing\n{\n}\n");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].kind, TypeKind::Interface);
        assert_eq!(types[0].name, "IThing");
        assert_eq!(types[0].modifiers, vec!["public", "partial"]);
    }

    #[test]
    fn test_struct_declaration() {
        let types = parse("public readonly struct IntVec\n{\n}\n");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].kind, TypeKind::Struct);
        assert_eq!(types[0].modifiers, vec!["public", "readonly"]);
    }

    #[test]
    fn test_enum_declaration() {
        let types = parse("public enum Color\n{\n}\n");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].kind, TypeKind::Enum);
        assert_eq!(types[0].modifiers, vec!["public"]);
    }

    #[test]
    fn test_enum_values() {
        let source = "public enum Color\n{\n    Red,\n    Green = 2,\n    Blue\n}\n";
        let types = parse(source);
        assert_eq!(types.len(), 1);
        let names: Vec<_> = types[0].members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Green", "Blue"]);
        for member in &types[0].members {
            assert_eq!(member.kind, MemberKind::EnumValue);
            assert_eq!(member.access_modifier, "public");
            assert_eq!(member.modifiers, vec!["public"]);
            assert!(member.return_type.is_none());
        }
    }

    #[test]
    fn test_class_members() {
        let source = "\
public class Foo
{
    public Foo()
    {
    }

    public static int Count(string name)
    {
        return 0;
    }

    private readonly int _count;
    public string Name { get; set; }
    public event EventHandler Changed;
}
";
        let types = parse(source);
        assert_eq!(types.len(), 1);
        let members = &types[0].members;
        assert_eq!(members.len(), 5);

        assert_eq!(members[0].kind, MemberKind::Constructor);
        assert_eq!(members[0].name, "Foo");
        assert_eq!(members[0].modifiers, vec!["public"]);
        assert!(members[0].return_type.is_none());
        assert_eq!(members[0].line_number, 3);

        assert_eq!(members[1].kind, MemberKind::Method);
        assert_eq!(members[1].name, "Count");
        assert_eq!(members[1].modifiers, vec!["public", "static"]);
        assert_eq!(members[1].return_type.as_deref(), Some("int"));

        assert_eq!(members[2].kind, MemberKind::Field);
        assert_eq!(members[2].name, "_count");
        assert_eq!(members[2].modifiers, vec!["private", "readonly"]);
        assert_eq!(members[2].return_type.as_deref(), Some("int"));

        assert_eq!(members[3].kind, MemberKind::Property);
        assert_eq!(members[3].name, "Name");
        assert_eq!(members[3].return_type.as_deref(), Some("string"));

        assert_eq!(members[4].kind, MemberKind::Event);
        assert_eq!(members[4].name, "Changed");
        assert_eq!(members[4].return_type.as_deref(), Some("EventHandler"));
    }

    #[test]
    fn test_constant_is_not_a_field() {
        let source = "public class Foo\n{\n    private const int MaxSize = 10;\n    private readonly int _size = 10;\n}\n";
        let types = parse(source);
        let members = &types[0].members;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "_size");
        assert_eq!(members[0].kind, MemberKind::Field);
    }

    #[test]
    fn test_constructor_name_must_match_type() {
        let source = "public class Foo\n{\n    public Foo()\n    {\n    }\n    public Bar()\n    {\n    }\n}\n";
        let types = parse(source);
        let members = &types[0].members;
        // "public Bar()" is not a constructor for Foo and has no return type,
        // so method matching fails too: the line yields nothing.
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].kind, MemberKind::Constructor);
        assert_eq!(members[0].name, "Foo");
    }

    #[test]
    fn test_static_constructor() {
        let source = "public class Foo\n{\n    public static Foo()\n    {\n    }\n}\n";
        let types = parse(source);
        let members = &types[0].members;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].kind, MemberKind::Constructor);
        assert_eq!(members[0].modifiers, vec!["public", "static"]);
    }

    #[test]
    fn test_interface_members_implicitly_public() {
        let source = "\
public interface IFoo
{
    string Name { get; }
    void Bar(int x);
    event Action Changed;
}
";
        let types = parse(source);
        let members = &types[0].members;
        assert_eq!(members.len(), 3);

        assert_eq!(members[0].kind, MemberKind::Property);
        assert_eq!(members[0].name, "Name");
        assert_eq!(members[0].access_modifier, "public");
        assert_eq!(members[0].modifiers, vec!["public"]);
        assert_eq!(members[0].return_type.as_deref(), Some("string"));

        assert_eq!(members[1].kind, MemberKind::Method);
        assert_eq!(members[1].name, "Bar");
        assert_eq!(members[1].return_type.as_deref(), Some("void"));

        assert_eq!(members[2].kind, MemberKind::Event);
        assert_eq!(members[2].name, "Changed");
        assert_eq!(members[2].return_type.as_deref(), Some("Action"));
    }

    #[test]
    fn test_array_and_nullable_return_types() {
        let source =
            "public class Foo\n{\n    public int[] Sizes(bool all)\n    {\n    }\n    public string? MaybeName(int id)\n    {\n    }\n}\n";
        let types = parse(source);
        let members = &types[0].members;
        assert_eq!(members[0].return_type.as_deref(), Some("int[]"));
        assert_eq!(members[1].return_type.as_deref(), Some("string?"));
    }

    #[test]
    fn test_member_requires_open_brace_depth() {
        // No brace has opened yet, so the method-looking line is plain code.
        let source = "public class Foo\npublic void Loose()\n";
        let types = parse(source);
        assert_eq!(types.len(), 1);
        assert!(types[0].members.is_empty());
    }

    #[test]
    fn test_members_without_open_type_are_ignored() {
        let source = "{\n    public void Orphan()\n}\n";
        let types = parse(source);
        assert!(types.is_empty());
    }

    #[test]
    fn test_nested_type_replaces_current() {
        // Nested declarations are not stacked: once Inner opens, all member
        // lines are attributed to it, including Outer's later methods.
        let source = "\
public class Outer
{
    public class Inner
    {
        public void Ping()
        {
        }
    }

    public void Pong()
    {
    }
}
";
        let types = parse(source);
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].name, "Outer");
        assert!(types[0].members.is_empty());
        assert_eq!(types[1].name, "Inner");
        let names: Vec<_> = types[1].members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ping", "Pong"]);
    }

    #[test]
    fn test_line_comments_stripped() {
        let source = "\
public class Foo // main entry
{
    // public int NotReal;
    public int Real; // trailing
}
";
        let types = parse(source);
        assert_eq!(types[0].name, "Foo");
        let members = &types[0].members;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Real");
        assert_eq!(members[0].signature, "public int Real;");
    }

    #[test]
    fn test_signature_is_stripped_line() {
        let source = "public class Foo\n{\n    public string Name { get; set; } // label\n}\n";
        let types = parse(source);
        assert_eq!(types[0].members[0].signature, "public string Name { get; set; }");
    }

    #[test]
    fn test_enum_values_only_inside_enum() {
        let source = "public class Foo\n{\n    Red,\n}\n";
        let types = parse(source);
        assert!(types[0].members.is_empty());
    }

    #[test]
    fn test_multiple_types_per_file() {
        let source = "\
public class Alpha
{
    public void Go()
    {
    }
}

public enum Beta
{
    One,
}
";
        let types = parse(source);
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].name, "Alpha");
        assert_eq!(types[0].members.len(), 1);
        assert_eq!(types[1].name, "Beta");
        assert_eq!(types[1].members.len(), 1);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let source = "\n\npublic class Foo\n{\n    public int X;\n}\n";
        let types = parse(source);
        assert_eq!(types[0].line_number, 3);
        assert_eq!(types[0].members[0].line_number, 5);
    }

    #[test]
    fn test_unbalanced_braces_desynchronize_depth() {
        // Stray closers push the depth negative; the type is still recognized
        // but its body never reads as open, so members are lost. Accepted.
        let types = parse("}\n}\npublic class Foo\n{\n    public int X;\n}\n");
        assert_eq!(types.len(), 1);
        assert!(types[0].members.is_empty());
    }

    #[test]
    fn test_struct_members() {
        let source = "public struct Pair\n{\n    public Pair(int a)\n    {\n    }\n    public int First;\n}\n";
        let types = parse(source);
        let members = &types[0].members;
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].kind, MemberKind::Constructor);
        assert_eq!(members[1].kind, MemberKind::Field);
    }

    #[test]
    fn test_virtual_override_method_modifiers() {
        let source = "public class Foo\n{\n    protected override void Tick(int delta)\n    {\n    }\n}\n";
        let types = parse(source);
        let member = &types[0].members[0];
        assert_eq!(member.kind, MemberKind::Method);
        assert_eq!(member.access_modifier, "protected");
        assert_eq!(member.modifiers, vec!["protected", "override"]);
    }

    #[test]
    fn test_static_readonly_array_field() {
        let source = "public class Foo\n{\n    private static readonly int[] _sizes = new int[4];\n}\n";
        let types = parse(source);
        let member = &types[0].members[0];
        assert_eq!(member.kind, MemberKind::Field);
        assert_eq!(member.modifiers, vec!["private", "static", "readonly"]);
        assert_eq!(member.return_type.as_deref(), Some("int[]"));
    }

    #[test]
    fn test_fully_commented_line_skips_depth_update() {
        // The brace on the commented line is invisible to the counter.
        let source = "public class Foo\n{\n    // { extra brace\n    public int X;\n}\n";
        let types = parse(source);
        assert_eq!(types[0].members.len(), 1);
    }

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("  public int X; // note"), "public int X;");
        assert_eq!(strip_comments("// all comment"), "");
        assert_eq!(strip_comments("   "), "");
        assert_eq!(strip_comments("public int X;"), "public int X;");
    }

    #[test]
    fn test_brace_delta() {
        assert_eq!(brace_delta("{"), 1);
        assert_eq!(brace_delta("}"), -1);
        assert_eq!(brace_delta("public string Name { get; set; }"), 0);
        assert_eq!(brace_delta("if (x) { if (y) {"), 2);
    }

    #[test]
    fn test_parse_file_missing_is_error() {
        let result = parser().parse_file(Path::new("/nonexistent/Nope.cs"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_file_reads_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Foo.cs");
        std::fs::write(&path, "public class Foo\n{\n    public int X;\n}\n").unwrap();
        let types = parser().parse_file(&path).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].file_path, path.to_string_lossy());
    }
}
