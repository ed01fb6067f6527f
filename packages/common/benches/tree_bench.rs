use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recruitify_common::tree::{create_root, find_node, insert_child, move_node, remove_node};
use recruitify_common::{props, BuilderNode, IdGenerator, Props};

/// A page with `sections` sections of `per_section` headings each
fn build_page(sections: usize, per_section: usize) -> BuilderNode {
    let mut ids = IdGenerator::new("bench");
    let mut tree = create_root().with_id("root");

    for _ in 0..sections {
        let section_id = ids.new_id();
        let section = BuilderNode::container("section", Props::new()).with_id(&section_id);
        tree = insert_child(&tree, "root", section, None);

        for _ in 0..per_section {
            let heading = BuilderNode::new("heading", props! { "text" => "Your headline" })
                .with_id(ids.new_id());
            tree = insert_child(&tree, &section_id, heading, None);
        }
    }

    tree
}

fn find_deep_node(c: &mut Criterion) {
    let tree = build_page(50, 20);

    c.bench_function("find_last_node", |b| {
        b.iter(|| find_node(black_box(&tree), black_box("bench-1050")))
    });
}

fn reorder_within_section(c: &mut Criterion) {
    let tree = build_page(50, 20);

    c.bench_function("move_node_same_parent", |b| {
        b.iter(|| move_node(black_box(&tree), "bench-2", "bench-1", Some(20)))
    });
}

fn remove_section(c: &mut Criterion) {
    let tree = build_page(50, 20);

    c.bench_function("remove_section", |b| {
        b.iter(|| remove_node(black_box(&tree), "bench-22"))
    });
}

criterion_group!(benches, find_deep_node, reorder_within_section, remove_section);
criterion_main!(benches);
