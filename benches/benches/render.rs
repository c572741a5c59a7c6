use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphql_builder::{combine_queries, render_query, Field, QueryDef, RenderMode};

// Selection nested `depth` levels deep, two leaves per level
fn deep_query(depth: usize) -> QueryDef {
    let mut field = Field::nested("leaf", vec!["id".into(), "title".into()]);
    for level in 0..depth {
        field = Field::nested(
            format!("level{level}"),
            vec!["id".into(), "title".into(), field],
        );
    }

    QueryDef::new("deep")
        .with_variable("parent", "ID!")
        .with_field("id")
        .with_field(field)
}

fn sample_queries(count: usize) -> Vec<QueryDef> {
    (0..count)
        .map(|i| {
            QueryDef::new(format!("query{i}"))
                .with_alias(format!("alias{i}"))
                .with_variable("parent", "ID!")
                .with_variable("first", "Int")
                .with_field("id")
                .with_field("title")
                .with_field(Field::nested("items", vec!["id".into(), "title".into()]))
        })
        .collect()
}

fn bench_render_deep(c: &mut Criterion) {
    let query = deep_query(24);

    c.bench_function("render_standalone_deep", |b| {
        b.iter(|| render_query(black_box(&query), RenderMode::Standalone));
    });
}

fn bench_combine(c: &mut Criterion) {
    let queries = sample_queries(8);

    c.bench_function("combine_eight_queries", |b| {
        b.iter(|| combine_queries(black_box(&queries)));
    });
}

criterion_group!(benches, bench_render_deep, bench_combine);
criterion_main!(benches);
