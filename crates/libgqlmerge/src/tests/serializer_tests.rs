//! Tests for `SdlSerializer` formatting rules.

use crate::tests::utils::parse_ok;
use crate::SdlSerializer;

/// Parses `source` as one file and prints it with a four-space indent.
fn reprint(source: &str) -> String {
    SdlSerializer::new("    ").serialize(&parse_ok(source))
}

// =============================================================================
// Layout
// =============================================================================

/// An empty document prints as nothing at all.
#[test]
fn empty_document() {
    assert_eq!(reprint(""), "");
}

/// Blocks are separated by one blank line; output ends in one newline.
#[test]
fn blocks_separated_by_blank_line() {
    assert_eq!(
        reprint("scalar A scalar B"),
        "scalar A\n\nscalar B\n",
    );
}

/// Categories print in a fixed order regardless of source order.
#[test]
fn category_order() {
    let output = reprint(
        "input In { a: Int }\n\
         union U = A\n\
         interface I { a: Int }\n\
         enum E { X }\n\
         scalar S\n\
         type T { a: Int }\n\
         type Query { t: T }\n\
         directive @d on FIELD\n\
         schema { query: Query }",
    );
    assert_eq!(
        output,
        "schema {\n    query: Query\n}\n\
         \n\
         directive @d on FIELD\n\
         \n\
         type Query {\n    t: T\n}\n\
         \n\
         type T {\n    a: Int\n}\n\
         \n\
         scalar S\n\
         \n\
         enum E {\n    X\n}\n\
         \n\
         interface I {\n    a: Int\n}\n\
         \n\
         union U = A\n\
         \n\
         input In {\n    a: Int\n}\n",
    );
}

/// Root types print query, mutation, subscription first even without a
/// schema block.
#[test]
fn root_types_first() {
    assert_eq!(
        reprint("type A type Subscription type Mutation type Query"),
        "type Query\n\ntype Mutation\n\ntype Subscription\n\ntype A\n",
    );
}

/// Schema keys print as query, mutation, subscription; a block naming no
/// root type is not printed.
#[test]
fn schema_block_keys() {
    assert_eq!(
        reprint("schema { subscription: S query: Q mutation: M }"),
        "schema {\n    query: Q\n    mutation: M\n    subscription: S\n}\n",
    );
    assert_eq!(reprint("schema { }"), "");
}

/// The indent unit is used verbatim, once per level.
#[test]
fn custom_indent_unit() {
    let doc = parse_ok("type A { f(a: Int, b: Int, c: Int): Int }");
    assert_eq!(
        SdlSerializer::new("\t").serialize(&doc),
        "type A {\n\tf(\n\t\ta: Int\n\t\tb: Int\n\t\tc: Int\n\t): Int\n}\n",
    );
}

// =============================================================================
// Arguments and directives
// =============================================================================

/// Two arguments stay inline; three wrap one per line.
#[test]
fn argument_wrapping_threshold() {
    assert_eq!(
        reprint("type A { f(a: Int, b: Int): Int }"),
        "type A {\n    f(a: Int, b: Int): Int\n}\n",
    );
    assert_eq!(
        reprint("type A { f(a: Int, b: Int, c: Int): Int }"),
        "type A {\n    f(\n        a: Int\n        b: Int\n        c: Int\n    ): Int\n}\n",
    );
}

/// Directive definitions wrap at depth one with `)` at column zero.
#[test]
fn directive_definition_wrapping() {
    assert_eq!(
        reprint("directive @d(a: Int, b: Int, c: [String!] = [\"x\"]) repeatable on FIELD | OBJECT"),
        "directive @d(\n    a: Int\n    b: Int\n    c: [String!] = [\"x\"]\n) repeatable on FIELD | OBJECT\n",
    );
}

/// Described arguments always wrap, description on its own line.
#[test]
fn described_arguments_wrap() {
    assert_eq!(
        reprint("type A { f(\"the id\" id: ID): Int }"),
        "type A {\n    f(\n        \"the id\"\n        id: ID\n    ): Int\n}\n",
    );
}

/// Directives print sorted by name, descending.
#[test]
fn directives_sorted_descending() {
    assert_eq!(
        reprint("scalar S @alpha @gamma @beta"),
        "scalar S @gamma @beta @alpha\n",
    );
}

/// Directive argument lists join values with `,`; more than two arguments
/// wrap.
#[test]
fn directive_arguments() {
    assert_eq!(
        reprint("scalar S @a(x: [A, B], y: 1)"),
        "scalar S @a(x: [A,B], y: 1)\n",
    );
    assert_eq!(
        reprint("type T { f: Int @a(x: 1, y: 2, z: 3) }"),
        "type T {\n    f: Int @a(\n        x: 1\n        y: 2\n        z: 3\n    )\n}\n",
    );
}

/// Defaults print after the type, lists joined with `, `.
#[test]
fn default_values() {
    assert_eq!(
        reprint("input I { a: Int = 1 b: [Role!]! = [ADMIN, USER] }"),
        "input I {\n    a: Int = 1\n    b: [Role!]! = [ADMIN, USER]\n}\n",
    );
}

// =============================================================================
// Definitions
// =============================================================================

/// Type references print their nullability exactly.
#[test]
fn type_references() {
    assert_eq!(
        reprint("type A { a: String b: String! c: [String] d: [String!]! e: [String]! }"),
        "type A {\n    a: String\n    b: String!\n    c: [String]\n    d: [String!]!\n    e: [String]!\n}\n",
    );
}

/// `implements` and directives come before the body.
#[test]
fn type_with_implements_and_directives() {
    assert_eq!(
        reprint("type A implements B & C @key(fields: \"id\") { id: ID! }"),
        "type A implements B & C @key(fields: \"id\") {\n    id: ID!\n}\n",
    );
}

/// Only the first description and first comment print.
#[test]
fn descriptions_and_comments() {
    assert_eq!(
        reprint(
            "\"\"\"\nA user.\n\"\"\"\n# internal\ntype User {\n\
               # the key\n\
               id: ID! # primary\n\
             } # end"
        ),
        "\"\"\"\nA user.\n\"\"\"\ntype User {\n    # the key\n    id: ID! # primary\n} # end\n",
    );
}

/// Enum values keep directives, descriptions and comments.
#[test]
fn enum_values() {
    assert_eq!(
        reprint("enum Role {\n\"admin\" ADMIN @deprecated\nUSER # default\n}"),
        "enum Role {\n    \"admin\"\n    ADMIN @deprecated\n    USER # default\n}\n",
    );
}

/// Unions print `=` with `|`-joined members; empty unions print bare.
#[test]
fn unions() {
    assert_eq!(reprint("union U = | A | B"), "union U = A | B\n");
    assert_eq!(reprint("union U @d"), "union U @d\n");
}

/// Empty bodies print without braces.
#[test]
fn empty_bodies() {
    assert_eq!(
        reprint("type A interface I enum E input In"),
        "type A\n\nenum E\n\ninterface I\n\ninput In\n",
    );
}

/// Printing is a fixed point: reparsing and reprinting yields the same text.
#[test]
fn output_reparses_to_same_output() {
    let first = reprint(
        "directive @auth(requires: Role = ADMIN, scopes: [String], note: String) on OBJECT | FIELD_DEFINITION\n\
         type Query { users(first: Int = 10, after: String, filter: UserFilter): [User!]! @auth }\n\
         \"A user\" type User implements Node @key(fields: \"id\") { id: ID! name: String # display\n}\n\
         enum Role { ADMIN USER }\n\
         input UserFilter { role: Role = USER ids: [ID!] = [\"1\", \"2\"] }",
    );
    assert_eq!(reprint(&first), first);
}

/// Repeated directives print once the document has been merged.
#[test]
fn merged_repeated_directives_print_once() {
    let output = crate::tests::utils::merge_to_sdl(&[(
        "a.graphql",
        "type A @key(fields: \"id\") @key(fields: \"sku\") { id: ID }",
    )])
    .expect("no conflict");
    assert_eq!(
        output,
        "type A @key(fields: \"id\", fields: \"sku\") {\n    id: ID\n}\n",
    );
}

/// CRLF input prints with `\n` line breaks only.
#[test]
fn crlf_descriptions_print_with_lf() {
    let output = reprint("\"\"\"\r\nA date\r\n\"\"\"\r\nscalar Date # ISO\r\n");
    assert_eq!(output, "\"\"\"\nA date\n\"\"\"\nscalar Date # ISO\n");
    assert!(!output.contains('\r'));
}
