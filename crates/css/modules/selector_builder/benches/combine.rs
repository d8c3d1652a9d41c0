use criterion::{Criterion, criterion_group, criterion_main};
use css_selector_builder::{BuildError, ComplexSelector, Selector as _, SelectorBuilder};
use std::hint::black_box;

/// The three-level combination from the crate's worked example.
fn nested_table_selector(builder: SelectorBuilder) -> Result<ComplexSelector, BuildError> {
    Ok(builder.combine(
        &builder.element("div")?.id("main")?.class("container")?.class("draggable")?,
        "+",
        &builder.combine(
            &builder.element("table")?.id("data")?,
            "~",
            &builder.combine(
                &builder.element("tr")?.pseudo_class("nth-of-type(even)")?,
                " ",
                &builder.element("td")?.pseudo_class("nth-of-type(even)")?,
            ),
        ),
    ))
}

fn bench_nested_combine(crit: &mut Criterion) {
    crit.bench_function("selector_builder_nested_combine", |bencher| {
        bencher.iter(|| {
            let sel = nested_table_selector(black_box(SelectorBuilder));
            black_box(sel.map(|built| built.stringify().len()))
        });
    });
}

fn bench_long_class_chain(crit: &mut Criterion) {
    let names: Vec<String> = (0..32).map(|index| format!("utility-{index}")).collect();
    crit.bench_function("selector_builder_class_chain_32", |bencher| {
        bencher.iter(|| {
            let mut sel = SelectorBuilder.element("div");
            for name in &names {
                sel = sel.and_then(|current| current.class(black_box(name)));
            }
            black_box(sel)
        });
    });
}

criterion_group!(benches, bench_nested_combine, bench_long_class_chain);
criterion_main!(benches);
