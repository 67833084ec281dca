//! Benchmark template rendering time.

use criterion::{criterion_group, criterion_main, Criterion};

use benches::context;
use benches::{Engine, Fillin, Naive, RegexEngine};

criterion_main! { benches }
criterion_group! { benches, bench_compile, bench_render }

/// Benchmarks the time taken to scan a template into segments.
fn bench_compile(c: &mut Criterion) {
    let mut g = c.benchmark_group("compile");

    for n in [10, 150] {
        let source = context::source(n);
        let template = fillin::TemplateString::new(&*source);
        g.bench_function(format!("fillin/{n}"), |b| {
            b.iter(|| template.compile());
        });
    }
}

/// Benchmarks the time taken to render a template as a string.
fn bench_render(c: &mut Criterion) {
    let mut g = c.benchmark_group("render");

    for n in [10, 150] {
        let source = context::source(n);
        let values = context::random(n);

        macro_rules! bench {
            ($E:ty) => {{
                g.bench_function(format!("{}/{n}", <$E as Engine>::name()), |b| {
                    let engine = <$E as Engine>::new(&source);
                    b.iter(|| <$E as Engine>::render(&engine, &values));
                });
            }};
        }

        bench!(Fillin);
        bench!(RegexEngine);
        bench!(Naive);

        let template = fillin::TemplateString::new(&*source);
        let compiled = template.compile();
        g.bench_function(format!("fillin-compiled/{n}"), |b| {
            b.iter(|| compiled.render_from(&values));
        });
    }
}
