//! Form blocks. A `form` is a container; its fields are ordinary child
//! nodes, and a `button` dropped inside it renders as the submit control.

use crate::fields::{Fields, InspectorField};
use crate::props::{array_prop, bool_prop, item_str, num_prop, str_prop};
use crate::registry::{children_or_placeholder, BlockDefinition, Category, Registry};
use recruitify_common::{props, BuilderNode, Props, VNode};

pub(crate) fn register(registry: &mut Registry) {
    registry
        .register(Form)
        .register(Input)
        .register(TextArea)
        .register(Select)
        .register(Checkbox);
}

/// Label wrapping a control, with the required marker
fn labelled(node: &BuilderNode, control: VNode) -> VNode {
    let mut label = VNode::element("label")
        .with_class("rf-field")
        .with_child(VNode::element("span").with_text(str_prop(node, "label", "")));
    if bool_prop(node, "required", false) {
        label = label.with_child(VNode::element("abbr").with_attr("title", "required").with_text("*"));
    }
    label.with_child(control)
}

fn with_required(control: VNode, node: &BuilderNode) -> VNode {
    if bool_prop(node, "required", false) {
        control.with_attr("required", "required")
    } else {
        control
    }
}

pub struct Form;

impl BlockDefinition for Form {
    fn key(&self) -> &str {
        "form"
    }

    fn label(&self) -> &str {
        "Form"
    }

    fn category(&self) -> Category {
        Category::Form
    }

    fn allows_children(&self) -> bool {
        true
    }

    fn default_props(&self) -> Props {
        props! {
            "action" => "/contact",
            "method" => "post",
            "successMessage" => "Thanks! We will be in touch shortly.",
        }
    }

    fn render(&self, node: &BuilderNode, children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let method = match str_prop(node, "method", "post") {
            "get" => "get",
            _ => "post",
        };

        VNode::element("form")
            .with_class("rf-form")
            .with_attr("action", str_prop(node, "action", ""))
            .with_attr("method", method)
            .with_attr("data-success-message", str_prop(node, "successMessage", ""))
            .with_children(children_or_placeholder(children))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .url("action", "Submit to")
            .select("method", "Method", &[("post", "POST"), ("get", "GET")])
            .textarea("successMessage", "Success message")
            .build()
    }
}

pub struct Input;

impl BlockDefinition for Input {
    fn key(&self) -> &str {
        "input"
    }

    fn label(&self) -> &str {
        "Input"
    }

    fn category(&self) -> Category {
        Category::Form
    }

    fn default_props(&self) -> Props {
        props! {
            "label" => "Full name",
            "name" => "name",
            "inputType" => "text",
            "placeholder" => "",
            "required" => false,
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let input_type = match str_prop(node, "inputType", "text") {
            kind @ ("text" | "email" | "tel" | "url" | "number" | "date") => kind,
            _ => "text",
        };
        let control = VNode::element("input")
            .with_attr("type", input_type)
            .with_attr("name", str_prop(node, "name", ""))
            .with_attr("placeholder", str_prop(node, "placeholder", ""));

        labelled(node, with_required(control, node))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("label", "Label")
            .text("name", "Field name")
            .select(
                "inputType",
                "Type",
                &[
                    ("text", "Text"),
                    ("email", "Email"),
                    ("tel", "Phone"),
                    ("url", "URL"),
                    ("number", "Number"),
                    ("date", "Date"),
                ],
            )
            .text("placeholder", "Placeholder")
            .toggle("required", "Required")
            .build()
    }
}

pub struct TextArea;

impl BlockDefinition for TextArea {
    fn key(&self) -> &str {
        "textarea"
    }

    fn label(&self) -> &str {
        "Text area"
    }

    fn category(&self) -> Category {
        Category::Form
    }

    fn default_props(&self) -> Props {
        props! {
            "label" => "Message",
            "name" => "message",
            "rows" => 4,
            "placeholder" => "",
            "required" => false,
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let rows = num_prop(node, "rows", 4.0).clamp(1.0, 30.0) as u32;
        let control = VNode::element("textarea")
            .with_attr("name", str_prop(node, "name", ""))
            .with_attr("rows", rows.to_string())
            .with_attr("placeholder", str_prop(node, "placeholder", ""));

        labelled(node, with_required(control, node))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("label", "Label")
            .text("name", "Field name")
            .number("rows", "Rows", 1.0, 30.0)
            .text("placeholder", "Placeholder")
            .toggle("required", "Required")
            .build()
    }
}

pub struct Select;

impl BlockDefinition for Select {
    fn key(&self) -> &str {
        "select"
    }

    fn label(&self) -> &str {
        "Dropdown"
    }

    fn category(&self) -> Category {
        Category::Form
    }

    fn default_props(&self) -> Props {
        props! {
            "label" => "Preferred location",
            "name" => "location",
            "options" => [
                { "label": "London", "value": "london" },
                { "label": "Manchester", "value": "manchester" },
                { "label": "Remote", "value": "remote" }
            ],
            "required" => false,
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let control = VNode::element("select")
            .with_attr("name", str_prop(node, "name", ""))
            .with_children(array_prop(node, "options").iter().map(|option| {
                VNode::element("option")
                    .with_attr("value", item_str(option, "value"))
                    .with_text(item_str(option, "label"))
            }));

        labelled(node, with_required(control, node))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("label", "Label")
            .text("name", "Field name")
            .list("options", "Options", &[("label", "Label"), ("value", "Value")])
            .toggle("required", "Required")
            .build()
    }
}

pub struct Checkbox;

impl BlockDefinition for Checkbox {
    fn key(&self) -> &str {
        "checkbox"
    }

    fn label(&self) -> &str {
        "Checkbox"
    }

    fn category(&self) -> Category {
        Category::Form
    }

    fn default_props(&self) -> Props {
        props! {
            "label" => "I agree to the privacy policy",
            "name" => "consent",
            "required" => true,
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let control = with_required(
            VNode::element("input")
                .with_attr("type", "checkbox")
                .with_attr("name", str_prop(node, "name", "")),
            node,
        );

        VNode::element("label")
            .with_class("rf-field rf-field--checkbox")
            .with_child(control)
            .with_child(VNode::element("span").with_text(str_prop(node, "label", "")))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("label", "Label")
            .text("name", "Field name")
            .toggle("required", "Required")
            .build()
    }
}
