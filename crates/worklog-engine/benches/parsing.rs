use criterion::{Criterion, criterion_group, criterion_main};
use worklog_engine::blocks::RICH_TEXT_LIMIT;
use worklog_engine::{parse_markdown, split_by_length, strip_inline_markdown};
mod common;

fn bench_parse_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let small = common::generate_report(5);
    group.bench_function("report_within_budget", |b| {
        b.iter(|| std::hint::black_box(parse_markdown(std::hint::black_box(&small))));
    });

    // Hits the block budget early; measures the cost of truncation
    let large = common::generate_report(500);
    group.bench_function("report_over_budget", |b| {
        b.iter(|| std::hint::black_box(parse_markdown(std::hint::black_box(&large))));
    });

    let code = common::generate_long_code(RICH_TEXT_LIMIT * 40);
    group.bench_function("long_code_fence", |b| {
        b.iter(|| std::hint::black_box(parse_markdown(std::hint::black_box(&code))));
    });

    group.finish();
}

fn bench_text_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    let line = "Mixed **bold**, _italic_, ~~gone~~, `code` and [links](https://example.com) ".repeat(20);
    group.bench_function("strip_inline_markdown", |b| {
        b.iter(|| std::hint::black_box(strip_inline_markdown(std::hint::black_box(&line))));
    });

    let text = "周报内容 weekly report 🙂 ".repeat(2000);
    group.bench_function("split_by_length", |b| {
        b.iter(|| std::hint::black_box(split_by_length(std::hint::black_box(&text), RICH_TEXT_LIMIT)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_markdown, bench_text_helpers);
criterion_main!(benches);
