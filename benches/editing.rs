//! Editing benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ctext::core::{Direction, Document};
use ctext::editor::{Command, Editor};

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("editing");

    let text = "Some text content here\twith a tab\r".repeat(50);

    group.bench_function("type_lines", |b| {
        b.iter(|| {
            let mut editor = Editor::new(Document::new(), 24, 80);
            for byte in text.bytes() {
                let command = if byte == b'\r' {
                    Command::Newline
                } else {
                    Command::Insert(byte)
                };
                editor.handle(command);
            }
            black_box(editor)
        })
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("editing");

    let lines: Vec<String> = (0..1000)
        .map(|i| format!("Line {}:\tSome text content here", i))
        .collect();
    let doc = Document::from_lines(&lines);

    group.bench_function("page_through", |b| {
        b.iter(|| {
            let mut editor = Editor::new(doc.clone(), 24, 80);
            for _ in 0..50 {
                editor.handle(Command::PageDown);
                editor.handle(Command::End);
                editor.handle(Command::Move(Direction::Left));
            }
            black_box(editor.viewport().row_offset)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_typing, bench_navigation);
criterion_main!(benches);
