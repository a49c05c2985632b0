use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use objson::{Map, RenderOptions, Value};

fn nested(depth: usize, breadth: usize) -> Value {
    if depth == 0 {
        return Value::Int(1);
    }
    let mut map = Map::with_capacity(breadth);
    for i in 0..breadth {
        map.insert(format!("k{i}"), nested(depth - 1, breadth));
    }
    Value::Map(map)
}

fn rows(len: usize) -> Value {
    Value::Seq(
        (0..len)
            .map(|i| {
                let mut row = Map::with_capacity(3);
                row.insert("id".into(), Value::Int(i as i64));
                row.insert("name".into(), Value::String(format!("row{i}")));
                row.insert("score".into(), Value::Float(i as f64 / 3.0));
                Value::Map(row)
            })
            .collect(),
    )
}

fn bench_render(c: &mut Criterion) {
    let docs = [("nested_4x4", nested(4, 4)), ("rows_1k", rows(1000))];
    let mut group = c.benchmark_group("render");
    for (name, doc) in &docs {
        let len = objson::render_to_string(doc, RenderOptions::default())
            .unwrap()
            .len();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(*name, |b| {
            b.iter(|| objson::render_to_string(black_box(doc), RenderOptions::default()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
