use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use magbridge::{converter, MergeOptions, RenderOptions};
use serde_json::{json, Value};
use std::hint::black_box;

fn section(i: usize, title: Value, answer: Value) -> Value {
    json!({
        "number": i + 1,
        "title": title,
        "question": format!("Question {}", i),
        "answer": answer,
        "layout": if i % 2 == 0 { "normal" } else { "reverse" },
        "knowledge_items": [
            {"term_ko": "용어", "term_en": "Term", "description": format!("Description {}", i)}
        ]
    })
}

fn generate_article(sections: usize, bilingual: bool) -> String {
    let sections: Vec<_> = (0..sections)
        .map(|i| {
            if bilingual {
                section(
                    i,
                    json!({"en": format!("Section {}", i), "ko": format!("섹션 {}", i)}),
                    json!({"en": "An answer with <markup> & quotes \"here\".", "ko": "답변 <마크업> & \"인용\"."}),
                )
            } else {
                section(i, json!(format!("섹션 {}", i)), json!("답변입니다."))
            }
        })
        .collect();

    let highlights: Vec<_> = (0..sections.len())
        .step_by(3)
        .map(|i| json!({"position": format!("after_section_{}", i + 1), "text": "강조"}))
        .collect();

    json!({
        "metadata": {"title": "제목", "description": "설명", "date": "2024-11-14"},
        "hero": {
            "title": "제목",
            "subtitle": "부제",
            "image": "/assets/hero.jpg",
            "guest": {"name": "Guest", "title": "Engineer"}
        },
        "sections": sections,
        "highlights": highlights,
        "footer": {"meta_text": "편집부"}
    })
    .to_string()
}

fn json_to_html_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_to_html");

    for size in [10, 100, 1000].iter() {
        let json_data = generate_article(*size, false);

        group.throughput(Throughput::Bytes(json_data.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", size), &json_data, |b, data| {
            b.iter(|| converter::json_to_html(black_box(data)).expect("Conversion should succeed"));
        });
    }

    group.finish();
}

fn json_to_bilingual_html_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_to_bilingual_html");
    let options = RenderOptions::default();

    for size in [10, 100, 1000].iter() {
        let json_data = generate_article(*size, true);

        group.throughput(Throughput::Bytes(json_data.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", size), &json_data, |b, data| {
            b.iter(|| {
                converter::json_to_bilingual_html(black_box(data), &options)
                    .expect("Conversion should succeed")
            });
        });
    }

    group.finish();
}

fn merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let options = MergeOptions::default();

    for size in [10, 100, 1000].iter() {
        let english = generate_article(*size, false);
        let korean = generate_article(*size, false);

        group.throughput(Throughput::Bytes((english.len() + korean.len()) as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", size),
            &(english, korean),
            |b, (en, ko)| {
                b.iter(|| {
                    converter::merge_json(black_box(en), black_box(ko), &options)
                        .expect("Merge should succeed")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    json_to_html_benchmark,
    json_to_bilingual_html_benchmark,
    merge_benchmark
);
criterion_main!(benches);
