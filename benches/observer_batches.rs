//! Observer hot-path benchmarks
//!
//! Measures the cost of applying intersection batches and of a full scroll
//! sweep through long pages.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sectionnav::{
    ActiveSection, InMemoryDocument, IntersectionEntry, NavConfig, PageArrival, PageSession,
    SectionRegistry,
};
use std::hint::black_box;
use std::rc::Rc;

const SECTION_SPACING: f64 = 600.0;

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Section {}", i)).collect()
}

/// A page with `count` evenly spaced sections.
fn long_page(count: usize) -> (InMemoryDocument, SectionRegistry) {
    let registry = SectionRegistry::from_labels(labels(count));
    let mut doc = InMemoryDocument::new()
        .with_viewport(1280.0, 900.0)
        .with_document_height(count as f64 * SECTION_SPACING + 900.0);
    for (index, section) in registry.iter().enumerate() {
        doc = doc.with_anchor(section.id.clone(), index as f64 * SECTION_SPACING + 100.0);
    }
    (doc, registry)
}

fn benchmark_apply_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_batch");

    for batch_size in [1, 8, 64] {
        let entries: Vec<IntersectionEntry> = labels(batch_size)
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                if i % 2 == 0 {
                    IntersectionEntry::entered(label)
                } else {
                    IntersectionEntry::left(label)
                }
            })
            .collect();
        let state = ActiveSection::new();

        group.bench_with_input(
            BenchmarkId::new("entries", batch_size),
            &entries,
            |b, entries| {
                b.iter(|| state.apply_batch(black_box(entries)));
            },
        );
    }

    group.finish();
}

fn benchmark_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_sweep");

    for section_count in [10, 100, 500] {
        let (doc, registry) = long_page(section_count);
        let session = PageSession::mount(
            registry,
            NavConfig::default(),
            Rc::new(doc.clone()),
            &doc,
            &PageArrival::new(1, None),
        );
        let bottom = section_count as f64 * SECTION_SPACING;

        group.bench_with_input(
            BenchmarkId::new("sections", section_count),
            &section_count,
            |b, _| {
                b.iter(|| {
                    let mut top = 0.0;
                    while top <= bottom {
                        doc.user_scroll_to(top);
                        top += SECTION_SPACING / 2.0;
                    }
                    doc.user_scroll_to(0.0);
                    black_box(session.active())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_apply_batch, benchmark_scroll_sweep);
criterion_main!(benches);
