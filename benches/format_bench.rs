use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phoner::{NamedFormat, PhoneNumber, PhoneUtil};

fn sample_numbers() -> Vec<PhoneNumber> {
    let util = PhoneUtil::new();
    [
        "+1 545-545-5454",
        "+1 545-545-5454 ext. 4307",
        "+1 (123) 456-7890 x321",
        "+44 20 8765 4321",
    ]
    .iter()
    .map(|text| util.parse(text).unwrap().unwrap())
    .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = sample_numbers();
    let mut group = c.benchmark_group("formatting");

    group.bench_function("canonical", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(number.canonical());
            }
        })
    });

    group.bench_function("pattern with conditional extension", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(number.format(black_box("+ %c (%a) %n%d{ #}%x")));
            }
        })
    });

    group.bench_function("named preset (europe)", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(number.format_named(NamedFormat::Europe));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
