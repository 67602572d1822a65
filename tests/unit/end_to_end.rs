use tsbyte::prelude::*;

use super::common::{class_names, compile_default, single_file};

#[test]
fn exported_point_class() {
    let (mut builder, _, root) = single_file("point.ts");
    let point = builder
        .class_declaration(root, "Point", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .constructor(point, &[("x", "number"), ("y", "number")])
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert!(result.is_success());
    assert_eq!(result.classes.len(), 1);

    let class = &result.classes[0];
    assert_eq!(class.name, "Point");
    assert_eq!(class.file_name, "point.ts");
    assert_eq!(class.constructors.len(), 1);

    let signature = &class.constructors[0];
    assert_eq!(signature.parameter_names().collect::<Vec<_>>(), ["x", "y"]);
    assert_eq!(signature.parameters[0].type_name, "number");
    assert_eq!(signature.parameters[1].type_name, "number");
    assert_eq!(signature.return_type, "Point");
}

#[test]
fn two_constructors_in_declared_order() {
    let (mut builder, _, root) = single_file("vec.ts");
    let class = builder
        .class_declaration(root, "Vec", ModifierFlags::EXPORT)
        .unwrap();
    builder.constructor(class, &[("all", "number")]).unwrap();
    let xyz = [("x", "number"), ("y", "number"), ("z", "number")];
    builder.constructor(class, &xyz).unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    let class = &result.classes[0];
    assert_eq!(class.constructors.len(), 2);
    assert_eq!(
        class.constructor_with_arity(1).unwrap().parameters[0].name,
        "all"
    );
    assert_eq!(
        class.constructors[1].parameter_names().collect::<Vec<_>>(),
        ["x", "y", "z"]
    );
}

#[test]
fn files_are_processed_in_order() {
    let mut builder = ProgramBuilder::new();
    let first = builder.add_file("f1.ts");
    let second = builder.add_file("f2.ts");
    let second_root = builder.root(second).unwrap();
    let first_root = builder.root(first).unwrap();
    // Declared out of order: the file order still wins.
    builder
        .class_declaration(second_root, "InF2", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .class_declaration(first_root, "InF1", ModifierFlags::EXPORT)
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert_eq!(class_names(&result), ["InF1", "InF2"]);
    assert_eq!(result.classes[0].file_name, "f1.ts");
    assert_eq!(result.classes[1].file_name, "f2.ts");
    assert_eq!(result.stats.files_lowered, 2);
}

#[test]
fn literals_and_classes_together() {
    let (mut builder, _, root) = single_file("mixed.ts");
    builder
        .node(root, SyntaxKind::NumericLiteral, "10")
        .unwrap();
    builder
        .class_declaration(root, "Thing", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .node(root, SyntaxKind::StringLiteral, "\"name\"")
        .unwrap();
    let program = builder.build();

    let result = compile_default(&program);
    assert!(result.is_success());
    assert_eq!(class_names(&result), ["Thing"]);
    assert_eq!(result.stats.literals_lowered, 2);
    result.module.code.assert_opcodes(&[
        OpCode::ConstI32,
        OpCode::Pop,
        OpCode::Constant,
        OpCode::Call,
        OpCode::Pop,
    ]);
}

#[test]
fn compiler_and_shorthand_agree() {
    let (mut builder, _, root) = single_file("same.ts");
    builder
        .class_declaration(root, "Same", ModifierFlags::EXPORT)
        .unwrap();
    builder
        .node(root, SyntaxKind::NumericLiteral, "2.5")
        .unwrap();
    let program = builder.build();

    let options = CompilerOptions::new().with_target(ScriptTarget::ES2020);
    let a = Compiler::new(options.clone()).compile(&program);
    let b = compile(&program, options);
    assert_eq!(a.classes, b.classes);
    assert_eq!(a.module.code, b.module.code);
    assert_eq!(a.module.encode(), b.module.encode());
}
