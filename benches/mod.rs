use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    console::bench_parse,
    console::bench_register_commands,
    console::bench_queue_cycle
);
criterion_main!(benches);
