//! The arena must agree with the pure tree algebra on every operation

use recruitify_common::tree::{self, create_root};
use recruitify_common::{count_nodes, props, BuilderNode, IdGenerator, Props};
use recruitify_editor::PageArena;

enum Op {
    Insert(&'static str, Option<usize>),
    Update(&'static str),
    Remove(&'static str),
    Move(&'static str, &'static str, Option<usize>),
}

fn page() -> BuilderNode {
    let section = |id: &str, children: Vec<BuilderNode>| {
        BuilderNode::container("section", Props::new())
            .with_id(id)
            .with_children(children)
    };
    let text = |id: &str| BuilderNode::new("text", props! { "text" => id }).with_id(id);

    create_root().with_id("root").with_children(vec![
        section("a", vec![text("x"), text("y"), text("z")]),
        section("b", vec![section("c", vec![text("d")])]),
        text("e"),
    ])
}

fn apply(tree: &BuilderNode, arena: &mut PageArena, op: &Op, ids: &mut IdGenerator) -> BuilderNode {
    match op {
        Op::Insert(parent, index) => {
            let child = BuilderNode::new("divider", Props::new()).with_id(ids.new_id());
            let _ = arena.insert(parent, child.clone(), *index);
            tree::insert_child(tree, parent, child, *index)
        }
        Op::Update(id) => {
            let props = props! { "text" => "changed" };
            let _ = arena.update_props(id, props.clone());
            tree::update_node_props(tree, id, props)
        }
        Op::Remove(id) => {
            let _ = arena.remove(id);
            tree::remove_node(tree, id)
        }
        Op::Move(id, parent, index) => {
            let moved = tree::move_node(tree, id, parent, *index);
            let arena_result = arena.move_node(id, parent, *index);
            assert_eq!(moved.is_some(), arena_result.is_ok(), "move {id} -> {parent}");
            moved.unwrap_or_else(|| tree.clone())
        }
    }
}

#[test]
fn test_sequences_match_algebra() {
    let sequences: Vec<Vec<Op>> = vec![
        vec![
            Op::Move("x", "a", Some(2)),
            Op::Move("z", "a", Some(0)),
            Op::Insert("a", Some(1)),
            Op::Update("y"),
        ],
        vec![
            Op::Move("c", "a", None),
            Op::Remove("b"),
            Op::Move("d", "root", Some(0)),
            Op::Insert("c", None),
        ],
        vec![
            Op::Remove("x"),
            Op::Remove("x"),
            Op::Update("ghost"),
            Op::Insert("ghost", None),
            Op::Move("ghost", "a", None),
            Op::Move("e", "ghost", None),
        ],
        vec![
            Op::Move("b", "d", None),
            Op::Move("a", "a", None),
            Op::Remove("root"),
            Op::Move("e", "b", Some(9)),
        ],
    ];

    for (n, ops) in sequences.iter().enumerate() {
        let mut ids = IdGenerator::new(format!("seq{n}"));
        let mut tree = page();
        let mut arena = PageArena::from_tree(&tree);

        for op in ops {
            tree = apply(&tree, &mut arena, op, &mut ids);
            assert_eq!(arena.to_tree(), tree, "sequence {n} diverged");
        }
    }
}

#[test]
fn test_moves_preserve_count() {
    let tree = page();
    let total = count_nodes(&tree);
    let mut arena = PageArena::from_tree(&tree);

    for (id, parent, index) in [
        ("x", "a", Some(2)),
        ("y", "c", Some(0)),
        ("a", "b", None),
        ("e", "a", Some(1)),
    ] {
        arena.move_node(id, parent, index).unwrap();
        assert_eq!(arena.len(), total);
        assert_eq!(count_nodes(&arena.to_tree()), total);
    }
}
