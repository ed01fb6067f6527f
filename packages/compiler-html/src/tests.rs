use crate::{compile_json_to_html, compile_to_html, render_tree, vnode_to_html, CompileError, CompileOptions};
use recruitify_blocks::{BlockDefinition, Category, Fields, InspectorField, Registry};
use recruitify_common::tree::{create_root, insert_child};
use recruitify_common::{props, BuilderNode, Props, VNode};

fn fragment_options() -> CompileOptions {
    CompileOptions {
        pretty: false,
        full_document: false,
        ..CompileOptions::default()
    }
}

fn sample_page() -> BuilderNode {
    let section = BuilderNode::container("section", Props::new()).with_id("s");
    let tree = insert_child(&create_root().with_id("root"), "root", section, None);
    insert_child(
        &tree,
        "s",
        BuilderNode::new("heading", props! { "text" => "Join <us>", "level" => "h1" }).with_id("h"),
        None,
    )
}

#[test]
fn test_compile_full_document() {
    let options = CompileOptions {
        title: Some("Acme Careers".to_string()),
        ..CompileOptions::default()
    };
    let html = compile_to_html(&sample_page(), &options).expect("Failed to compile");

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<title>Acme Careers</title>"));
    assert!(html.contains("<section"));
    assert!(html.contains("Join &lt;us&gt;"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_compile_fragment() {
    let html = compile_to_html(&sample_page(), &fragment_options()).unwrap();

    assert!(html.starts_with("<div class=\"rf-page\">"));
    assert!(!html.contains('\n'));
    assert!(html.contains("<h1"));
}

#[test]
fn test_empty_page_shows_placeholder() {
    let html = compile_to_html(&create_root(), &fragment_options()).unwrap();
    assert!(html.contains("Drop blocks here"));
}

#[test]
fn test_unknown_block_placeholder() {
    let tree = create_root().with_children(vec![BuilderNode::new("carousel", Props::new())]);
    let html = compile_to_html(&tree, &fragment_options()).unwrap();

    assert!(html.contains("Unknown block: carousel"));
}

#[test]
fn test_rejects_non_root_document() {
    let tree = BuilderNode::container("section", Props::new());
    let result = compile_to_html(&tree, &CompileOptions::default());

    assert!(matches!(result, Err(CompileError::InvalidRoot(ref t)) if t == "section"));
}

#[test]
fn test_compile_json() {
    let json = r#"{
        "id": "root",
        "type": "root",
        "props": {},
        "children": [
            { "id": "b", "type": "button", "props": { "label": "Apply", "href": "/apply" } }
        ]
    }"#;
    let html = compile_json_to_html(json, &fragment_options()).unwrap();
    assert!(html.contains("href=\"/apply\""));
    assert!(html.contains(">Apply</a>"));

    assert!(matches!(
        compile_json_to_html("{", &fragment_options()),
        Err(CompileError::Json(_))
    ));
}

#[test]
fn test_self_closing_and_styles() {
    let vnode = VNode::element("div").with_child(
        VNode::element("img")
            .with_attr("src", "/logo.png")
            .with_style("width", "120px")
            .with_style("height", "auto"),
    );

    let html = vnode_to_html(&vnode, &fragment_options());
    assert_eq!(
        html,
        "<div><img src=\"/logo.png\" style=\"height: auto; width: 120px\" /></div>"
    );
}

#[test]
fn test_pretty_indentation() {
    let vnode = VNode::element("ul")
        .with_child(VNode::element("li").with_text("One"))
        .with_child(VNode::element("li").with_text("Two"));
    let options = CompileOptions {
        full_document: false,
        ..CompileOptions::default()
    };

    assert_eq!(
        vnode_to_html(&vnode, &options),
        "<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>\n"
    );
}

#[test]
fn test_button_inside_form_renders_submit() {
    let form = BuilderNode::container("form", Props::new())
        .with_id("f")
        .with_children(vec![BuilderNode::new("button", props! { "label" => "Send" })]);
    let tree = create_root().with_children(vec![form]);

    let vnode = render_tree(&tree, &Registry::standard());
    let button = vnode.find(&|n| n.tag() == Some("button")).unwrap();
    assert_eq!(button.attr("type"), Some("submit"));
}

struct Banner;

impl BlockDefinition for Banner {
    fn key(&self) -> &str {
        "heading"
    }

    fn label(&self) -> &str {
        "Banner heading"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        Props::new()
    }

    fn render(&self, _node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("marquee").with_text("Now hiring")
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node).build()
    }
}

#[test]
fn test_override_registry() {
    let mut overrides = Registry::new();
    overrides.register(Banner);
    let options = CompileOptions {
        registry: Some(overrides),
        ..fragment_options()
    };

    let html = compile_to_html(&sample_page(), &options).unwrap();
    assert!(html.contains("<marquee>Now hiring</marquee>"));
    assert!(html.contains("<section"));
}
