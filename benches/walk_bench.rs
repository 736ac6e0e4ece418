use camino::{Utf8Path, Utf8PathBuf};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filepick::{FilePick, Patterns, TraversalConfigBuilder};
use tempfile::TempDir;

fn build_tree() -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    for d in 0..8 {
        for s in 0..8 {
            let sub = root.join(format!("dir{d}/sub{s}"));
            std::fs::create_dir_all(&sub).unwrap();
            for f in 0..8 {
                let ext = if f % 2 == 0 { "rs" } else { "txt" };
                std::fs::write(sub.join(format!("file{f}.{ext}")), b"bench").unwrap();
            }
        }
    }
    (dir, root)
}

fn bench_pattern_matching(c: &mut Criterion) {
    let patterns = Patterns::compile_many(["*.rs", "build*.o", "node_modules", "/srv/app/vendor"]);
    let paths = [
        Utf8Path::new("/srv/app/src/main.rs"),
        Utf8Path::new("/srv/app/build/out.o"),
        Utf8Path::new("/srv/app/node_modules/pkg/index.js"),
        Utf8Path::new("/srv/app/README.md"),
    ];

    c.bench_function("pattern_matching", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(patterns.is_match(black_box(path)));
            }
        })
    });
}

fn bench_blocking_walk(c: &mut Criterion) {
    let (_dir, root) = build_tree();
    let config = TraversalConfigBuilder::new().files(["*.rs"]).build();

    c.bench_function("blocking_walk", |b| {
        b.iter(|| {
            let files = FilePick::collect_blocking(black_box(&root), config.clone()).unwrap();
            black_box(files)
        })
    });
}

#[cfg(feature = "async")]
fn bench_async_walk(c: &mut Criterion) {
    use tokio::runtime::Runtime;

    let (_dir, root) = build_tree();
    let config = TraversalConfigBuilder::new().files(["*.rs"]).build();
    let rt = Runtime::new().unwrap();

    c.bench_function("async_walk", |b| {
        b.iter(|| {
            rt.block_on(async {
                let files = FilePick::collect(black_box(&root), config.clone())
                    .await
                    .unwrap();
                black_box(files)
            })
        })
    });
}

#[cfg(not(feature = "async"))]
criterion_group!(benches, bench_pattern_matching, bench_blocking_walk);

#[cfg(feature = "async")]
criterion_group!(
    benches,
    bench_pattern_matching,
    bench_blocking_walk,
    bench_async_walk
);

criterion_main!(benches);
