use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use waypoint::tree::{build_tree, DrawRoutes, RouteTree};
use waypoint::Compiler;

// Builds `sections` scopes, each holding an index, a detail and an archive route.
fn site_tree(sections: usize) -> RouteTree<()> {
    build_tree(|route| {
        route.to("", "site.views.home");
        for i in 0..sections {
            route.scope(&format!("section{}", i), |route| {
                route.to("", format!("section{}.views.index", i));
                route.to("<id:int>", format!("section{}.views.detail", i));
                route.scope("archive", |route| {
                    route.to("<year:int>/<month:int>/<slug>", format!("section{}.views.post", i));
                });
            });
        }
    })
}

fn compile_benchmark(c: &mut Criterion) {
    let compiler = Compiler::new().with_name_prefix("site");
    let mut group = c.benchmark_group("compile");

    for sections in [10usize, 100, 1000].iter() {
        let tree = site_tree(*sections);
        group.throughput(Throughput::Elements((*sections * 3 + 1) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &tree, |b, tree| {
            b.iter(|| compiler.compile(black_box(tree)).unwrap())
        });
    }

    group.finish();
}

fn resolve_benchmark(c: &mut Criterion) {
    let resolver = Compiler::new()
        .compile(&site_tree(100))
        .unwrap()
        .into_resolver()
        .unwrap();

    c.bench_function("resolve last section", |b| {
        b.iter(|| resolver.resolve(black_box("/section99/archive/2024/05/hello-world/")))
    });
}

criterion_group!(benches, compile_benchmark, resolve_benchmark);
criterion_main!(benches);
