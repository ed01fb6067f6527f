use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recruitify_blocks::Registry;
use recruitify_common::tree::{create_root, insert_child};
use recruitify_common::BuilderNode;
use recruitify_compiler_html::{compile_to_html, CompileOptions};

/// Every standard block, one section each
fn palette_page() -> BuilderNode {
    let registry = Registry::standard();
    let mut tree = create_root();
    let root_id = tree.id.clone();

    for key in registry.keys() {
        let section = registry.create("section").unwrap();
        let section_id = section.id.clone();
        tree = insert_child(&tree, &root_id, section, None);
        tree = insert_child(&tree, &section_id, registry.create(key).unwrap(), None);
    }

    tree
}

fn compile_palette_page(c: &mut Criterion) {
    let tree = palette_page();
    let options = CompileOptions::default();

    c.bench_function("compile_palette_page", |b| {
        b.iter(|| compile_to_html(black_box(&tree), &options))
    });
}

criterion_group!(benches, compile_palette_page);
criterion_main!(benches);
