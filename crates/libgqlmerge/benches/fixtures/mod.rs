use libgqlmerge::SdlSource;

/// Builds a modular schema of `modules` files. Each file declares one entity
/// type, an enum, an input, and contributes fields to the shared `Query` and
/// `Mutation` roots, the way a per-feature schema layout does.
pub fn modular_schema(modules: usize) -> Vec<SdlSource> {
    let mut sources = Vec::with_capacity(modules + 1);
    sources.push(SdlSource::new(
        "schema.graphql",
        "\"\"\"\nEntry points.\n\"\"\"\n\
         schema {\n  query: Query\n  mutation: Mutation\n}\n\n\
         directive @auth(requires: Role = USER) on OBJECT | FIELD_DEFINITION\n\n\
         enum Role {\n  ADMIN\n  USER\n}\n\n\
         scalar DateTime\n",
    ));

    for i in 0..modules {
        sources.push(SdlSource::new(
            format!("module_{i:04}.graphql"),
            module_text(i),
        ));
    }
    sources
}

/// One file holding every module of [`modular_schema()`], for lexer and
/// parser throughput numbers.
pub fn single_file_schema(modules: usize) -> String {
    modular_schema(modules)
        .into_iter()
        .map(|source| source.text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn module_text(i: usize) -> String {
    format!(
        "\"\"\"\nEntity number {i}.\n\"\"\"\n\
         type Entity{i} implements Node @auth {{\n\
         \x20 id: ID!\n\
         \x20 # creation time\n\
         \x20 createdAt: DateTime!\n\
         \x20 status: Status{i}\n\
         \x20 related(first: Int = 10, after: String, filter: Filter{i}): [Entity{i}!]!\n\
         }}\n\n\
         enum Status{i} {{\n  ACTIVE\n  ARCHIVED @deprecated(reason: \"use ACTIVE\")\n}}\n\n\
         input Filter{i} {{\n  status: Status{i} = ACTIVE\n  ids: [ID!] = [\"a\", \"b\"]\n}}\n\n\
         interface Node {{\n  id: ID!\n}}\n\n\
         type Query {{\n  entity{i}(id: ID!): Entity{i}\n}}\n\n\
         type Mutation {{\n  archiveEntity{i}(id: ID!): Entity{i} @auth(requires: ADMIN)\n}}\n\n\
         extend type Entity{i} {{\n  score: Float\n}}\n"
    )
}
