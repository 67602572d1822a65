use tsbyte::prelude::*;

use super::common::{class_names, compile_default, single_file};

#[test]
fn top_level_class_without_export_is_visible() {
    let (mut builder, _, root) = single_file("a.ts");
    builder
        .class_declaration(root, "Implicit", ModifierFlags::empty())
        .unwrap();
    let program = builder.build();

    assert_eq!(class_names(&compile_default(&program)), ["Implicit"]);
}

#[test]
fn class_in_function_body_is_never_visible() {
    let (mut builder, _, root) = single_file("a.ts");
    let body = builder
        .function_declaration(root, "factory", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .class_declaration(body, "Hidden", ModifierFlags::EXPORT)
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert!(result.classes.is_empty());
    assert_eq!(result.stats.deferred_nodes, 1);
}

#[test]
fn class_nested_in_a_block_is_pruned() {
    let (mut builder, _, root) = single_file("a.ts");
    let block = builder.node(root, SyntaxKind::Block, "{}").unwrap();
    builder
        .class_declaration(block, "InBlock", ModifierFlags::EXPORT)
        .unwrap();
    let program = builder.build();

    assert!(compile_default(&program).classes.is_empty());
}

#[test]
fn namespace_members_need_export() {
    let (mut builder, _, root) = single_file("ns.ts");
    let geometry = builder
        .namespace(root, "Geometry", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .class_declaration(geometry.body, "Circle", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .class_declaration(geometry.body, "Helper", ModifierFlags::empty())
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert_eq!(class_names(&result), ["Circle"]);
}

#[test]
fn nested_namespaces_follow_document_order() {
    let (mut builder, _, root) = single_file("ns.ts");
    let outer = builder
        .namespace(root, "A", ModifierFlags::empty())
        .unwrap();
    builder
        .class_declaration(outer.body, "First", ModifierFlags::EXPORT)
        .unwrap();
    let inner = builder
        .namespace(outer.body, "B", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .class_declaration(inner.body, "Second", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .class_declaration(outer.body, "Third", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .class_declaration(root, "Fourth", ModifierFlags::empty())
        .unwrap();
    let program = builder.build();

    assert_eq!(
        class_names(&compile_default(&program)),
        ["First", "Second", "Third", "Fourth"]
    );
}

#[test]
fn unexported_namespace_prunes_its_subtree() {
    let (mut builder, _, root) = single_file("ns.ts");
    let outer = builder
        .namespace(root, "Outer", ModifierFlags::empty())
        .unwrap();
    let private = builder
        .namespace(outer.body, "Private", ModifierFlags::empty())
        .unwrap();
    builder
        .class_declaration(private.body, "Secret", ModifierFlags::EXPORT)
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert!(result.classes.is_empty());
    assert!(result.stats.nodes_pruned >= 1);
}

#[test]
fn declaration_files_contribute_nothing() {
    let mut builder = ProgramBuilder::new();
    let decl = builder.add_declaration_file("globals.d.ts");
    let file = builder.add_file("main.ts");
    let decl_root = builder.root(decl).unwrap();
    let root = builder.root(file).unwrap();
    let ambient = ModifierFlags::EXPORT | ModifierFlags::AMBIENT;
    builder
        .class_declaration(decl_root, "Ambient", ambient)
        .unwrap();
    builder
        .node(decl_root, SyntaxKind::NumericLiteral, "1")
        .unwrap();
    builder
        .class_declaration(root, "Real", ModifierFlags::EXPORT)
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert_eq!(class_names(&result), ["Real"]);
    assert_eq!(result.stats.declaration_files_skipped, 1);
    assert_eq!(result.stats.literals_lowered, 0);
    assert!(result.module.code.is_empty());
}

#[test]
fn unresolvable_classes_are_skipped_silently() {
    let (mut builder, _, root) = single_file("partial.ts");
    builder
        .unbound_class_declaration(root, "NoSymbol", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .unresolved_class_declaration(root, "NoType", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .anonymous_class_declaration(root, ModifierFlags::EXPORT | ModifierFlags::DEFAULT)
        .unwrap();
    builder
        .class_declaration(root, "Fine", ModifierFlags::EXPORT)
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert!(result.is_success());
    assert_eq!(class_names(&result), ["Fine"]);
    assert_eq!(result.stats.classes_skipped, 3);
    assert_eq!(result.stats.classes_extracted, 1);
}

#[test]
fn unresolved_parameter_types_keep_the_class() {
    let (mut builder, _, root) = single_file("partial.ts");
    let class = builder
        .class_declaration(root, "Partial", ModifierFlags::EXPORT)
        .unwrap();
    builder.constructor(class, &[("x", "number")]).unwrap();
    builder
        .constructor_with_unresolved_parameter(class, &[("p", "Unknown")], 0)
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert_eq!(class_names(&result), ["Partial"]);
    assert_eq!(result.stats.classes_skipped, 0);

    let constructors = &result.classes[0].constructors;
    assert_eq!(constructors.len(), 2);
    assert_eq!(constructors[1].parameters[0].name, "p");
    assert_eq!(constructors[1].parameters[0].type_name, "any");
}
