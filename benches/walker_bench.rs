//! Benchmarks for usage-walker
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_path_helpers(c: &mut Criterion) {
    use usage_walker::fs::path::{dirname, is_hidden, join, normalize};

    c.bench_function("normalize_dirname_join", |b| {
        b.iter(|| {
            let child = join(black_box("/data/projects/app/src"), black_box("main.rs"));
            let parent = normalize(&dirname(&child));
            black_box(is_hidden(&child));
            black_box(parent);
        })
    });
}

fn benchmark_ancestor_fold(c: &mut Criterion) {
    use usage_walker::fs::types::Metadata;
    use usage_walker::walker::UsageTables;

    c.bench_function("fold_ancestors_depth_8", |b| {
        b.iter(|| {
            let mut tables = UsageTables::new();
            tables.fold_ancestors("/r", "/r", &Metadata::directory());
            tables.fold_ancestors(
                black_box("/r/a/b/c/d/e/f/g/file"),
                "/r",
                &Metadata::file(4096),
            );
            black_box(tables);
        })
    });
}

fn benchmark_memory_walk(c: &mut Criterion) {
    use usage_walker::{aggregate, MemoryFs};

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    c.bench_function("walk_memory_tree_100", |b| {
        b.iter(|| {
            let mut fs = MemoryFs::new().dir("/r");
            for d in 0..10 {
                fs = fs.dir(&format!("/r/d{}", d));
                for f in 0..9 {
                    fs = fs.file(&format!("/r/d{}/f{}", d, f), 1024);
                }
            }
            let outcome = runtime.block_on(aggregate(fs, "/r"));
            black_box(outcome);
        })
    });
}

criterion_group!(
    benches,
    benchmark_path_helpers,
    benchmark_ancestor_fold,
    benchmark_memory_walk
);
criterion_main!(benches);
