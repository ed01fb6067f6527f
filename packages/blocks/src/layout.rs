//! Layout blocks: structural containers and spacing.

use crate::fields::{Fields, InspectorField};
use crate::props::{bool_prop, num_prop, opt_str_prop, px, str_prop};
use crate::registry::{children_or_placeholder, BlockDefinition, Category, Registry};
use recruitify_common::{props, BuilderNode, Props, VNode};

pub(crate) fn register(registry: &mut Registry) {
    registry
        .register(Section)
        .register(Container)
        .register(Columns)
        .register(Column)
        .register(Grid)
        .register(Spacer)
        .register(Divider);
}

const ALIGN_ITEMS: &[(&str, &str)] = &[
    ("start", "Top"),
    ("center", "Center"),
    ("end", "Bottom"),
    ("stretch", "Stretch"),
];

pub struct Section;

impl BlockDefinition for Section {
    fn key(&self) -> &str {
        "section"
    }

    fn label(&self) -> &str {
        "Section"
    }

    fn category(&self) -> Category {
        Category::Layout
    }

    fn allows_children(&self) -> bool {
        true
    }

    fn default_props(&self) -> Props {
        props! {
            "background" => "#ffffff",
            "paddingY" => 64,
            "fullWidth" => false,
        }
    }

    fn render(&self, node: &BuilderNode, children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let padding_y = px(num_prop(node, "paddingY", 64.0));
        let class = if bool_prop(node, "fullWidth", false) {
            "rf-section rf-section--full"
        } else {
            "rf-section"
        };

        VNode::element("section")
            .with_class(class)
            .with_style_opt("background", opt_str_prop(node, "background"))
            .with_style("padding", format!("{padding_y} 0"))
            .with_children(children_or_placeholder(children))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .color("background", "Background")
            .number("paddingY", "Vertical padding", 0.0, 240.0)
            .toggle("fullWidth", "Full width")
            .build()
    }
}

pub struct Container;

impl BlockDefinition for Container {
    fn key(&self) -> &str {
        "container"
    }

    fn label(&self) -> &str {
        "Container"
    }

    fn category(&self) -> Category {
        Category::Layout
    }

    fn allows_children(&self) -> bool {
        true
    }

    fn default_props(&self) -> Props {
        props! { "maxWidth" => 1200, "paddingX" => 24 }
    }

    fn render(&self, node: &BuilderNode, children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("div")
            .with_class("rf-container")
            .with_style("max-width", px(num_prop(node, "maxWidth", 1200.0)))
            .with_style("margin", "0 auto")
            .with_style("padding", format!("0 {}", px(num_prop(node, "paddingX", 24.0))))
            .with_children(children_or_placeholder(children))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .number("maxWidth", "Max width", 320.0, 1920.0)
            .number("paddingX", "Horizontal padding", 0.0, 120.0)
            .build()
    }
}

pub struct Columns;

impl BlockDefinition for Columns {
    fn key(&self) -> &str {
        "columns"
    }

    fn label(&self) -> &str {
        "Columns"
    }

    fn category(&self) -> Category {
        Category::Layout
    }

    fn allows_children(&self) -> bool {
        true
    }

    fn default_props(&self) -> Props {
        props! { "gap" => 24, "align" => "start", "stackOnMobile" => true }
    }

    fn render(&self, node: &BuilderNode, children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let class = if bool_prop(node, "stackOnMobile", true) {
            "rf-columns rf-columns--stack"
        } else {
            "rf-columns"
        };

        VNode::element("div")
            .with_class(class)
            .with_style("display", "flex")
            .with_style("gap", px(num_prop(node, "gap", 24.0)))
            .with_style("align-items", str_prop(node, "align", "start"))
            .with_children(children_or_placeholder(children))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .number("gap", "Gap", 0.0, 96.0)
            .select("align", "Vertical alignment", ALIGN_ITEMS)
            .toggle("stackOnMobile", "Stack on mobile")
            .build()
    }
}

pub struct Column;

impl Column {
    fn flex(width: &str) -> &'static str {
        match width {
            "1/2" => "0 0 50%",
            "1/3" => "0 0 33.333%",
            "2/3" => "0 0 66.666%",
            "1/4" => "0 0 25%",
            "3/4" => "0 0 75%",
            _ => "1 1 0",
        }
    }
}

impl BlockDefinition for Column {
    fn key(&self) -> &str {
        "column"
    }

    fn label(&self) -> &str {
        "Column"
    }

    fn category(&self) -> Category {
        Category::Layout
    }

    fn allows_children(&self) -> bool {
        true
    }

    fn default_props(&self) -> Props {
        props! { "width" => "auto" }
    }

    fn render(&self, node: &BuilderNode, children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("div")
            .with_class("rf-column")
            .with_style("flex", Self::flex(str_prop(node, "width", "auto")))
            .with_children(children_or_placeholder(children))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .select(
                "width",
                "Width",
                &[
                    ("auto", "Auto"),
                    ("1/4", "One quarter"),
                    ("1/3", "One third"),
                    ("1/2", "Half"),
                    ("2/3", "Two thirds"),
                    ("3/4", "Three quarters"),
                ],
            )
            .build()
    }
}

pub struct Grid;

impl BlockDefinition for Grid {
    fn key(&self) -> &str {
        "grid"
    }

    fn label(&self) -> &str {
        "Grid"
    }

    fn category(&self) -> Category {
        Category::Layout
    }

    fn allows_children(&self) -> bool {
        true
    }

    fn default_props(&self) -> Props {
        props! { "columns" => 3, "gap" => 24 }
    }

    fn render(&self, node: &BuilderNode, children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let columns = num_prop(node, "columns", 3.0).clamp(1.0, 12.0) as u32;

        VNode::element("div")
            .with_class("rf-grid")
            .with_style("display", "grid")
            .with_style("grid-template-columns", format!("repeat({columns}, minmax(0, 1fr))"))
            .with_style("gap", px(num_prop(node, "gap", 24.0)))
            .with_children(children_or_placeholder(children))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .number("columns", "Columns", 1.0, 12.0)
            .number("gap", "Gap", 0.0, 96.0)
            .build()
    }
}

pub struct Spacer;

impl BlockDefinition for Spacer {
    fn key(&self) -> &str {
        "spacer"
    }

    fn label(&self) -> &str {
        "Spacer"
    }

    fn category(&self) -> Category {
        Category::Layout
    }

    fn default_props(&self) -> Props {
        props! { "height" => 32 }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("div")
            .with_class("rf-spacer")
            .with_attr("aria-hidden", "true")
            .with_style("height", px(num_prop(node, "height", 32.0)))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node).number("height", "Height", 0.0, 400.0).build()
    }
}

pub struct Divider;

impl BlockDefinition for Divider {
    fn key(&self) -> &str {
        "divider"
    }

    fn label(&self) -> &str {
        "Divider"
    }

    fn category(&self) -> Category {
        Category::Layout
    }

    fn default_props(&self) -> Props {
        props! { "color" => "#e5e7eb", "thickness" => 1 }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("hr")
            .with_class("rf-divider")
            .with_style("border", "none")
            .with_style(
                "border-top",
                format!(
                    "{} solid {}",
                    px(num_prop(node, "thickness", 1.0)),
                    str_prop(node, "color", "#e5e7eb")
                ),
            )
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .color("color", "Color")
            .number("thickness", "Thickness", 1.0, 16.0)
            .build()
    }
}
