//! Performance benchmarks for grove

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grove::test_utils::ScanDir;
use grove::{MemoryReporter, ScanFilters, TreeWalker, render_tree, to_pretty_json};

const MANIFEST: &str = r#"{
  "name": "bench-app",
  "scripts": {"build": "tsc", "test": "vitest"},
  "dependencies": {"react": "^19.0.0", "react-dom": "^19.0.0"},
  "devDependencies": {"typescript": "^5.6.0"}
}"#;

/// Lay out a synthetic project: `width` top-level packages, each with nested
/// sources and a manifest.
fn build_project(width: usize, files_per_dir: usize) -> ScanDir {
    let dir = ScanDir::new();
    for p in 0..width {
        dir.add_file(&format!("packages/pkg{}/package.json", p), MANIFEST);
        for f in 0..files_per_dir {
            dir.add_file(
                &format!("packages/pkg{}/src/module{}.ts", p, f),
                "export {};",
            );
            dir.add_file(
                &format!("packages/pkg{}/src/util/helper{}.ts", p, f),
                "export {};",
            );
        }
    }
    dir.add_file("node_modules/react/index.js", "module.exports = {};");
    dir
}

fn bench_walk(c: &mut Criterion) {
    let project = build_project(10, 10);

    c.bench_function("walk_small_project", |b| {
        b.iter(|| {
            let mut reporter = MemoryReporter::new();
            let walker = TreeWalker::new(ScanFilters::default());
            black_box(walker.walk(project.path(), &mut reporter))
        })
    });

    let large = build_project(50, 20);
    c.bench_function("walk_large_project", |b| {
        b.iter(|| {
            let mut reporter = MemoryReporter::new();
            let walker = TreeWalker::new(ScanFilters::default());
            black_box(walker.walk(large.path(), &mut reporter))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let project = build_project(20, 20);
    let mut reporter = MemoryReporter::new();
    let tree = TreeWalker::new(ScanFilters::default())
        .walk(project.path(), &mut reporter)
        .expect("walk should succeed");

    c.bench_function("render_tree", |b| {
        b.iter(|| black_box(render_tree("bench", &tree)))
    });

    c.bench_function("render_json", |b| {
        b.iter(|| black_box(to_pretty_json("bench", &tree)))
    });
}

criterion_group!(benches, bench_walk, bench_render);
criterion_main!(benches);
