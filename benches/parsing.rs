//! Performance benchmarks for mdblock
//!
//! Run with: cargo bench

use std::convert::Infallible;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use mdblock::{BlockDetail, BlockType, Options, Renderer, TextKind};

/// Sample Markdown documents of various sizes
mod samples {
    pub const SMALL: &str = r#"# Heading

This is a paragraph with some text
that continues on a second line.

    fn main() {
        println!("hi");
    }

***
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
Section Title
=============

This paragraph has several lines of prose so the assembler
has to accumulate more than one line before it can flush
the block to the renderer.

## Subsection ##

    let x = 42;

        nested indentation
	tabbed line

- - -

Another paragraph to close the section.
"#;
        section.repeat(200)
    }

    /// One line that never ends
    pub fn long_line() -> String {
        "word ".repeat(200_000)
    }

    /// Many blank lines between tiny paragraphs
    pub fn blank_heavy() -> String {
        "a\n\n\n\n\n".repeat(20_000)
    }
}

/// Renderer that only counts text bytes, isolating parser cost.
#[derive(Default)]
struct ByteCounter(usize);

impl Renderer for ByteCounter {
    type Error = Infallible;

    fn enter_block(&mut self, _: BlockType, _: BlockDetail) -> Result<(), Infallible> {
        Ok(())
    }

    fn leave_block(&mut self, _: BlockType, _: BlockDetail) -> Result<(), Infallible> {
        Ok(())
    }

    fn text(&mut self, _: TextKind, text: &[u8]) -> Result<(), Infallible> {
        self.0 += text.len();
        Ok(())
    }
}

fn count_bytes(input: &str) -> usize {
    let mut counter = ByteCounter::default();
    let _ = mdblock::parse(input.as_bytes(), &mut counter, &Options::default());
    counter.0
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small_events", |b| {
        b.iter(|| count_bytes(black_box(samples::SMALL)))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large_events", |b| {
        b.iter(|| count_bytes(black_box(&large)))
    });
    group.bench_function("large_html", |b| {
        b.iter(|| mdblock::to_html(black_box(&large)))
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let long_line = samples::long_line();
    group.throughput(Throughput::Bytes(long_line.len() as u64));
    group.bench_function("long_line", |b| {
        b.iter(|| count_bytes(black_box(&long_line)))
    });

    let blank_heavy = samples::blank_heavy();
    group.throughput(Throughput::Bytes(blank_heavy.len() as u64));
    group.bench_function("blank_heavy", |b| {
        b.iter(|| count_bytes(black_box(&blank_heavy)))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::large();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| mdblock::to_html(black_box(&input)))
    });

    group.bench_function("with_reuse", |b| {
        let mut buffer = Vec::with_capacity(input.len() * 2);
        b.iter(|| {
            mdblock::to_html_into(black_box(&input), &mut buffer);
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_pathological, bench_buffer_reuse);
criterion_main!(benches);
