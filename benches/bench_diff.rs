use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;

fn bench_object_diff(c: &mut Criterion) {
    let mut first = dashkit_lib::diff::Record::new();
    let mut second = dashkit_lib::diff::Record::new();
    for i in 0..128 {
        first.insert(format!("key{}", i), json!(i));
        // every eighth key is missing from the second record, every fourth
        // carries a changed value
        if i % 8 != 0 {
            let value = if i % 4 == 0 { json!(i + 1) } else { json!(i) };
            second.insert(format!("key{}", i), value);
        }
    }
    c.bench_function("object_diff_128", |b| {
        b.iter(|| dashkit_lib::diff::object_diff(&first, &second))
    });
}

fn bench_capitalize(c: &mut Criterion) {
    c.bench_function("capitalize_first_letter", |b| {
        b.iter(|| dashkit_lib::text::capitalize_first_letter("organization name"))
    });
}

criterion_group!(benches, bench_object_diff, bench_capitalize);
criterion_main!(benches);
