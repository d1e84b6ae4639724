//! C5 AST Extractor: a single extractor for the TypeScript/JavaScript
//! family, collapsed from the teacher's per-language `LanguageParser` trait
//! (`parsing::LanguageParser`: `find_calls`, `find_implementations`,
//! `find_extends`, `find_imports`, `find_uses`, `find_defines`) down to the
//! one language family this spec targets. Traversal style — a single
//! recursive `walk` matching on `node.kind()`, tracking current
//! function/class context as it descends — follows the teacher's
//! `parsing::javascript::JavaScriptParser`.
//!
//! Returns the spec's `Symbol`/`Type`/`Import`/`Relationship` entities
//! directly; the teacher's packed 32-byte `CompactSymbol` binary
//! representation is not carried over (see DESIGN.md).

use crate::error::ExtractError;
use crate::extract::ids::{ImportCounter, SymbolCounter, TypeCounter};
use crate::model::{Import, Relationship, Symbol, Type};
use crate::types::{FileId, Range, RelationKind, SymbolKind, Visibility};
use std::path::Path;
use tree_sitter::{Language, Node, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    TypeScript,
    Tsx,
    JavaScript,
}

fn dialect_for(path: &Path) -> Result<Dialect, ExtractError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ts") => Ok(Dialect::TypeScript),
        Some("tsx") => Ok(Dialect::Tsx),
        Some("js") | Some("jsx") | Some("mjs") | Some("cjs") => Ok(Dialect::JavaScript),
        _ => Err(ExtractError::UnsupportedFileType {
            path: path.to_path_buf(),
        }),
    }
}

fn language_for(dialect: Dialect) -> Language {
    match dialect {
        Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        Dialect::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
    }
}

pub struct ExtractionResult {
    pub symbols: Vec<Symbol>,
    pub types: Vec<Type>,
    pub imports: Vec<Import>,
    pub relationships: Vec<Relationship>,
    pub line_count: u32,
    pub parse_errors: u32,
}

struct Ctx {
    current_function: Option<(String, tree_sitter::Range)>,
    current_class: Option<String>,
}

/// Extracts symbols, types, imports, and relationships from one source file.
pub struct TypeScriptExtractor;

impl TypeScriptExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(
        &self,
        path: &Path,
        code: &str,
        file_id: FileId,
    ) -> Result<ExtractionResult, ExtractError> {
        let dialect = dialect_for(path)?;
        let mut parser = Parser::new();
        parser
            .set_language(&language_for(dialect))
            .expect("bundled grammar always sets");

        let tree = parser.parse(code, None).ok_or_else(|| ExtractError::ParseFailed {
            path: path.to_path_buf(),
        })?;
        let root = tree.root_node();

        let mut symbols = Vec::new();
        let mut type_counter = TypeCounter::new();
        let mut types = Vec::new();
        let mut relationships = Vec::new();
        let mut symbol_counter = SymbolCounter::new();
        let file_path = path.to_string_lossy().to_string();

        let mut ctx = Ctx {
            current_function: None,
            current_class: None,
        };

        walk_symbols(
            root,
            code,
            file_id,
            &file_path,
            &mut symbol_counter,
            &mut symbols,
            &mut relationships,
            &mut ctx,
        );

        let mut imports = Vec::new();
        let mut import_counter = ImportCounter::new();
        extract_imports(root, code, file_id, &mut import_counter, &mut imports);

        let name_to_id: std::collections::HashMap<&str, crate::types::SymbolId> = symbols
            .iter()
            .map(|s| (s.name.as_str(), s.id))
            .collect();

        let calls = find_calls(root, code);
        for (caller, callee, range) in calls {
            if let (Some(&from), Some(&to)) = (name_to_id.get(caller), name_to_id.get(callee)) {
                relationships.push(Relationship::new(from, to, RelationKind::Calls).with_range(range));
            }
        }

        let extends = find_extends(root, code);
        for (child, parent, range) in extends {
            if let (Some(&from), Some(&to)) = (name_to_id.get(child), name_to_id.get(parent)) {
                relationships.push(
                    Relationship::new(from, to, RelationKind::Extends).with_range(range),
                );
            } else if name_to_id.contains_key(child) {
                // Parent symbol not defined in this file. Cross-file
                // resolution is out of scope, so we don't fabricate an edge
                // with a synthetic target; we record the name as a type
                // reference so the relationship is at least discoverable.
                let tid = type_counter.next_id();
                types.push(Type::new(tid, parent, file_id));
            }
        }

        let implements = find_implements(root, code);
        for (child, iface, range) in implements {
            if let (Some(&from), Some(&to)) = (name_to_id.get(child), name_to_id.get(iface)) {
                relationships.push(
                    Relationship::new(from, to, RelationKind::Implements).with_range(range),
                );
            }
        }

        let parse_errors = count_errors(root);
        let line_count = code.lines().count() as u32;

        Ok(ExtractionResult {
            symbols,
            types,
            imports,
            relationships,
            line_count,
            parse_errors,
        })
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn count_errors(node: Node) -> u32 {
    let mut count = if node.is_error() { 1 } else { 0 };
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        count += count_errors(child);
    }
    count
}

fn node_range(node: Node) -> Range {
    Range::new(
        node.start_position().row as u32,
        node.start_position().column as u32,
        node.end_position().row as u32,
        node.end_position().column as u32,
    )
}

fn is_exported(node: Node) -> bool {
    let mut anc = node.parent();
    for _ in 0..3 {
        match anc {
            Some(a) if a.kind() == "export_statement" => return true,
            Some(a) => anc = a.parent(),
            None => break,
        }
    }
    false
}

fn doc_comment(node: Node, code: &str) -> Option<String> {
    let target = if is_exported(node) {
        node.parent().and_then(|p| p.prev_sibling())
    } else {
        node.prev_sibling()
    }?;
    if target.kind() != "comment" {
        return None;
    }
    let text = &code[target.byte_range()];
    if !text.starts_with("/**") {
        return None;
    }
    Some(
        text.trim_start_matches("/**")
            .trim_end_matches("*/")
            .lines()
            .map(|l| l.trim_start_matches('*').trim())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string(),
    )
}

fn signature(node: Node, code: &str) -> String {
    let start = node.start_byte();
    let end = node
        .child_by_field_name("body")
        .map(|b| b.start_byte())
        .unwrap_or_else(|| node.end_byte());
    code[start..end].trim().to_string()
}

fn text_of<'a>(node: Node, code: &'a str) -> &'a str {
    &code[node.byte_range()]
}

#[allow(clippy::too_many_arguments)]
fn walk_symbols(
    node: Node,
    code: &str,
    file_id: FileId,
    file_path: &str,
    counter: &mut SymbolCounter,
    symbols: &mut Vec<Symbol>,
    relationships: &mut Vec<Relationship>,
    ctx: &mut Ctx,
) {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let name = text_of(name_node, code);
                let sym = Symbol::new(
                    counter.next_id(),
                    name,
                    SymbolKind::Function,
                    file_id,
                    file_path,
                    node_range(node),
                )
                .with_signature(signature(node, code))
                .with_visibility(Visibility::Public);
                let sym = match doc_comment(node, code) {
                    Some(doc) => sym.with_doc(doc),
                    None => sym,
                };
                symbols.push(sym);
            }
            descend_into_body(node, code, file_id, file_path, counter, symbols, relationships, ctx);
        }
        "class_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let class_name = text_of(name_node, code).to_string();
                let sym = Symbol::new(
                    counter.next_id(),
                    class_name.clone(),
                    SymbolKind::Class,
                    file_id,
                    file_path,
                    node_range(node),
                )
                .with_signature(signature(node, code))
                .with_visibility(Visibility::Public);
                let sym = match doc_comment(node, code) {
                    Some(doc) => sym.with_doc(doc),
                    None => sym,
                };
                let class_id = sym.id;
                symbols.push(sym);

                let saved_class = ctx.current_class.take();
                ctx.current_class = Some(class_name);
                if let Some(body) = node.child_by_field_name("body") {
                    extract_class_members(body, code, file_id, file_path, counter, symbols, relationships, ctx, class_id);
                }
                ctx.current_class = saved_class;
            }
        }
        "interface_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let sym = Symbol::new(
                    counter.next_id(),
                    text_of(name_node, code),
                    SymbolKind::Interface,
                    file_id,
                    file_path,
                    node_range(node),
                )
                .with_signature(signature(node, code))
                .with_visibility(Visibility::Public);
                symbols.push(sym);
            }
        }
        "type_alias_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let sym = Symbol::new(
                    counter.next_id(),
                    text_of(name_node, code),
                    SymbolKind::TypeAlias,
                    file_id,
                    file_path,
                    node_range(node),
                )
                .with_signature(signature(node, code))
                .with_visibility(Visibility::Public);
                symbols.push(sym);
            }
        }
        "enum_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let sym = Symbol::new(
                    counter.next_id(),
                    text_of(name_node, code),
                    SymbolKind::Enum,
                    file_id,
                    file_path,
                    node_range(node),
                )
                .with_visibility(Visibility::Public);
                symbols.push(sym);
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            extract_variable_declaration(node, code, file_id, file_path, counter, symbols, relationships, ctx);
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                walk_symbols(child, code, file_id, file_path, counter, symbols, relationships, ctx);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn descend_into_body(
    node: Node,
    code: &str,
    file_id: FileId,
    file_path: &str,
    counter: &mut SymbolCounter,
    symbols: &mut Vec<Symbol>,
    relationships: &mut Vec<Relationship>,
    ctx: &mut Ctx,
) {
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            walk_symbols(child, code, file_id, file_path, counter, symbols, relationships, ctx);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn extract_class_members(
    body: Node,
    code: &str,
    file_id: FileId,
    file_path: &str,
    counter: &mut SymbolCounter,
    symbols: &mut Vec<Symbol>,
    relationships: &mut Vec<Relationship>,
    ctx: &mut Ctx,
    class_id: crate::types::SymbolId,
) {
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        match child.kind() {
            "method_definition" | "method_signature" => {
                if let Some(name_node) = child.child_by_field_name("name") {
                    let name = text_of(name_node, code);
                    let visibility = member_visibility(child, code);
                    let sym = Symbol::new(
                        counter.next_id(),
                        name,
                        SymbolKind::Method,
                        file_id,
                        file_path,
                        node_range(child),
                    )
                    .with_signature(signature(child, code))
                    .with_visibility(visibility)
                    .with_parent(class_id);
                    let member_id = sym.id;
                    symbols.push(sym);
                    relationships.push(Relationship::new(member_id, class_id, RelationKind::MemberOf).with_range(node_range(child)));
                }
                descend_into_body(child, code, file_id, file_path, counter, symbols, relationships, ctx);
            }
            "public_field_definition" | "field_definition" | "property_signature" => {
                if let Some(name_node) = child.child_by_field_name("name") {
                    let name = text_of(name_node, code);
                    let visibility = member_visibility(child, code);
                    let sym = Symbol::new(
                        counter.next_id(),
                        name,
                        SymbolKind::Field,
                        file_id,
                        file_path,
                        node_range(child),
                    )
                    .with_visibility(visibility)
                    .with_parent(class_id);
                    let member_id = sym.id;
                    symbols.push(sym);
                    relationships.push(Relationship::new(member_id, class_id, RelationKind::MemberOf).with_range(node_range(child)));
                }
            }
            _ => {}
        }
    }
}

fn member_visibility(node: Node, code: &str) -> Visibility {
    let text = text_of(node, code);
    if text.contains("private") || text.trim_start().starts_with('#') {
        Visibility::Private
    } else if text.contains("protected") {
        Visibility::Protected
    } else {
        Visibility::Public
    }
}

#[allow(clippy::too_many_arguments)]
fn extract_variable_declaration(
    node: Node,
    code: &str,
    file_id: FileId,
    file_path: &str,
    counter: &mut SymbolCounter,
    symbols: &mut Vec<Symbol>,
    relationships: &mut Vec<Relationship>,
    ctx: &mut Ctx,
) {
    let is_const = text_of(node, code).trim_start().starts_with("const");
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "variable_declarator" {
            continue;
        }
        let Some(name_node) = child.child_by_field_name("name") else {
            continue;
        };
        if name_node.kind() != "identifier" {
            continue;
        }
        let name = text_of(name_node, code);
        let value = child.child_by_field_name("value");
        let is_arrow = value.map(|v| v.kind() == "arrow_function").unwrap_or(false);

        let kind = if is_arrow {
            SymbolKind::Function
        } else if is_const {
            SymbolKind::Constant
        } else {
            SymbolKind::Variable
        };

        let sym = Symbol::new(
            counter.next_id(),
            name,
            kind,
            file_id,
            file_path,
            node_range(child),
        )
        .with_visibility(Visibility::Public);
        symbols.push(sym);

        if is_arrow {
            if let Some(value) = value {
                descend_into_body(value, code, file_id, file_path, counter, symbols, relationships, ctx);
            }
        }
    }
}

fn find_calls<'a>(root: Node, code: &'a str) -> Vec<(&'a str, &'a str, Range)> {
    let mut calls = Vec::new();
    walk_calls(root, code, None, &mut calls);
    calls
}

fn walk_calls<'a>(
    node: Node,
    code: &'a str,
    current_fn: Option<&'a str>,
    calls: &mut Vec<(&'a str, &'a str, Range)>,
) {
    let next_ctx = enclosing_function_name(node, code).or(current_fn);

    if node.kind() == "call_expression" {
        if let Some(fn_node) = node.child_by_field_name("function") {
            if let Some(callee) = callee_name(fn_node, code) {
                if let Some(caller) = next_ctx {
                    calls.push((caller, callee, node_range(node)));
                }
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk_calls(child, code, next_ctx, calls);
    }
}

fn enclosing_function_name<'a>(node: Node, code: &'a str) -> Option<&'a str> {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" | "method_definition" => {
            node.child_by_field_name("name").map(|n| text_of(n, code))
        }
        "arrow_function" | "function_expression" => {
            let parent = node.parent()?;
            if parent.kind() == "variable_declarator" {
                parent.child_by_field_name("name").map(|n| text_of(n, code))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn callee_name<'a>(node: Node, code: &'a str) -> Option<&'a str> {
    match node.kind() {
        "identifier" => Some(text_of(node, code)),
        "member_expression" => Some(text_of(node, code)),
        _ => None,
    }
}

fn find_extends<'a>(root: Node, code: &'a str) -> Vec<(&'a str, &'a str, Range)> {
    let mut out = Vec::new();
    walk_extends(root, code, &mut out);
    out
}

fn walk_extends<'a>(node: Node, code: &'a str, out: &mut Vec<(&'a str, &'a str, Range)>) {
    match node.kind() {
        "class_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let class_name = text_of(name_node, code);
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "class_heritage" {
                        let mut hc = child.walk();
                        for heritage_child in child.children(&mut hc) {
                            if heritage_child.kind() == "extends_clause" {
                                let mut ec = heritage_child.walk();
                                for parent_node in heritage_child.children(&mut ec) {
                                    if parent_node.kind() == "identifier"
                                        || parent_node.kind() == "member_expression"
                                    {
                                        out.push((
                                            class_name,
                                            text_of(parent_node, code),
                                            node_range(parent_node),
                                        ));
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        "interface_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let iface_name = text_of(name_node, code);
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "extends_type_clause" {
                        let mut ec = child.walk();
                        for parent_node in child.children(&mut ec) {
                            if parent_node.kind() == "type_identifier" {
                                out.push((iface_name, text_of(parent_node, code), node_range(parent_node)));
                            }
                        }
                    }
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk_extends(child, code, out);
    }
}

fn find_implements<'a>(root: Node, code: &'a str) -> Vec<(&'a str, &'a str, Range)> {
    let mut out = Vec::new();
    walk_implements(root, code, &mut out);
    out
}

fn walk_implements<'a>(node: Node, code: &'a str, out: &mut Vec<(&'a str, &'a str, Range)>) {
    if node.kind() == "class_declaration" {
        if let Some(name_node) = node.child_by_field_name("name") {
            let class_name = text_of(name_node, code);
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if child.kind() == "class_heritage" {
                    let mut hc = child.walk();
                    for heritage_child in child.children(&mut hc) {
                        if heritage_child.kind() == "implements_clause" {
                            let mut ic = heritage_child.walk();
                            for iface_node in heritage_child.children(&mut ic) {
                                if iface_node.kind() == "type_identifier" {
                                    out.push((class_name, text_of(iface_node, code), node_range(iface_node)));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk_implements(child, code, out);
    }
}

fn extract_imports(
    node: Node,
    code: &str,
    file_id: FileId,
    counter: &mut ImportCounter,
    imports: &mut Vec<Import>,
) {
    match node.kind() {
        "import_statement" => {
            process_import_statement(node, code, file_id, counter, imports);
        }
        "export_statement" => {
            if node.child_by_field_name("source").is_some() {
                process_reexport(node, code, file_id, counter, imports);
            }
        }
        _ => {}
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        extract_imports(child, code, file_id, counter, imports);
    }
}

fn process_import_statement(
    node: Node,
    code: &str,
    file_id: FileId,
    counter: &mut ImportCounter,
    imports: &mut Vec<Import>,
) {
    let Some(source_node) = node.child_by_field_name("source") else {
        return;
    };
    let source_path = text_of(source_node, code).trim_matches(|c| c == '"' || c == '\'');
    let is_type_only = {
        let mut cursor = node.walk();
        node.children(&mut cursor).any(|c| c.kind() == "type" && c.start_byte() < source_node.start_byte())
    };

    let import_clause = {
        let mut cursor = node.walk();
        node.children(&mut cursor).find(|c| c.kind() == "import_clause")
    };

    let Some(import_clause) = import_clause else {
        imports.push(Import {
            id: counter.next_id(),
            file_id,
            source_path: source_path.to_string(),
            alias: None,
            is_glob: false,
            is_type_only,
        });
        return;
    };

    let mut has_namespace = false;
    let mut has_default = false;
    let mut default_name = None;
    let mut namespace_name = None;
    let mut named_count = 0;

    let mut cursor = import_clause.walk();
    for child in import_clause.children(&mut cursor) {
        match child.kind() {
            "identifier" => {
                has_default = true;
                default_name = Some(text_of(child, code).to_string());
            }
            "namespace_import" => {
                has_namespace = true;
                let mut nc = child.walk();
                if let Some(id) = child.children(&mut nc).find(|n| n.kind() == "identifier") {
                    namespace_name = Some(text_of(id, code).to_string());
                }
            }
            "named_imports" => {
                let mut nc = child.walk();
                for spec in child.children(&mut nc) {
                    if spec.kind() == "import_specifier" {
                        named_count += 1;
                        let mut sp = spec.walk();
                        let local = spec
                            .children(&mut sp)
                            .filter(|n| n.kind() == "identifier")
                            .last()
                            .map(|n| text_of(n, code).to_string());
                        imports.push(Import {
                            id: counter.next_id(),
                            file_id,
                            source_path: source_path.to_string(),
                            alias: local,
                            is_glob: false,
                            is_type_only,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    if has_namespace {
        imports.push(Import {
            id: counter.next_id(),
            file_id,
            source_path: source_path.to_string(),
            alias: namespace_name,
            is_glob: true,
            is_type_only,
        });
    } else if has_default {
        imports.push(Import {
            id: counter.next_id(),
            file_id,
            source_path: source_path.to_string(),
            alias: default_name,
            is_glob: false,
            is_type_only,
        });
    } else if named_count == 0 {
        imports.push(Import {
            id: counter.next_id(),
            file_id,
            source_path: source_path.to_string(),
            alias: None,
            is_glob: false,
            is_type_only,
        });
    }
}

fn process_reexport(
    node: Node,
    code: &str,
    file_id: FileId,
    counter: &mut ImportCounter,
    imports: &mut Vec<Import>,
) {
    let Some(source_node) = node.child_by_field_name("source") else {
        return;
    };
    let source_path = text_of(source_node, code).trim_matches(|c| c == '"' || c == '\'');
    let is_glob = text_of(node, code).contains("* from");
    imports.push(Import {
        id: counter.next_id(),
        file_id,
        source_path: source_path.to_string(),
        alias: None,
        is_glob,
        is_type_only: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn extract(src: &str, filename: &str) -> ExtractionResult {
        let extractor = TypeScriptExtractor::new();
        extractor
            .extract(&PathBuf::from(filename), src, FileId::new(1))
            .unwrap()
    }

    #[test]
    fn extracts_exported_function() {
        let result = extract("export function greet(name: string): string { return name; }", "a.ts");
        assert_eq!(result.symbols.len(), 1);
        assert_eq!(result.symbols[0].name, "greet");
        assert_eq!(result.symbols[0].kind, SymbolKind::Function);
        assert_eq!(result.symbols[0].visibility, Visibility::Public);
    }

    #[test]
    fn extracts_class_with_methods_and_fields() {
        let src = r#"
export class Widget {
    private id: number;
    constructor(id: number) { this.id = id; }
    render(): void {}
}
"#;
        let result = extract(src, "widget.ts");
        let names: Vec<&str> = result.symbols.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"Widget"));
        assert!(names.contains(&"render"));
        assert!(names.contains(&"id"));
        let field = result.symbols.iter().find(|s| s.name == "id").unwrap();
        assert_eq!(field.visibility, Visibility::Private);
    }

    #[test]
    fn class_members_emit_member_of_relationships() {
        let src = r#"
export class Widget {
    private id: number;
    render(): void {}
}
"#;
        let result = extract(src, "widget.ts");
        let widget = result.symbols.iter().find(|s| s.name == "Widget").unwrap();
        let id_field = result.symbols.iter().find(|s| s.name == "id").unwrap();
        let render_method = result.symbols.iter().find(|s| s.name == "render").unwrap();

        assert!(result
            .relationships
            .iter()
            .any(|r| r.kind == RelationKind::MemberOf && r.from == id_field.id && r.to == widget.id));
        assert!(result
            .relationships
            .iter()
            .any(|r| r.kind == RelationKind::MemberOf && r.from == render_method.id && r.to == widget.id));
    }

    #[test]
    fn extracts_class_extends_relationship() {
        let src = "class Base {}\nclass Derived extends Base {}\n";
        let result = extract(src, "b.ts");
        assert!(result
            .relationships
            .iter()
            .any(|r| r.kind == RelationKind::Extends));
    }

    #[test]
    fn extracts_named_and_default_imports() {
        let src = "import React from 'react';\nimport { useState, useEffect } from 'react';\n";
        let result = extract(src, "c.tsx");
        assert!(result.imports.iter().any(|i| i.alias.as_deref() == Some("React")));
        assert!(result.imports.iter().any(|i| i.alias.as_deref() == Some("useState")));
    }

    #[test]
    fn detects_call_relationship_between_functions() {
        let src = "function a() { b(); }\nfunction b() {}\n";
        let result = extract(src, "d.js");
        assert!(result.relationships.iter().any(|r| r.kind == RelationKind::Calls));
    }

    #[test]
    fn unsupported_extension_errors() {
        let extractor = TypeScriptExtractor::new();
        let err = extractor.extract(&PathBuf::from("a.py"), "x = 1", FileId::new(1));
        assert!(matches!(err, Err(ExtractError::UnsupportedFileType { .. })));
    }

    #[test]
    fn counts_lines_and_parse_errors() {
        let result = extract("const a = 1;\nconst b = 2;\n", "e.ts");
        assert_eq!(result.line_count, 2);
        assert_eq!(result.parse_errors, 0);
    }
}
