//! Job blocks. Live vacancy data is injected by the hosting site at
//! publish time; these blocks render the shell and the data attributes the
//! job feed binds to.

use crate::fields::{Fields, InspectorField};
use crate::props::{bool_prop, num_prop, opt_str_prop, str_prop};
use crate::registry::{BlockDefinition, Category, Registry};
use recruitify_common::{props, BuilderNode, Props, VNode};

pub(crate) fn register(registry: &mut Registry) {
    registry
        .register(JobList)
        .register(JobSearch)
        .register(JobCard)
        .register(ApplyForm);
}

pub struct JobList;

impl BlockDefinition for JobList {
    fn key(&self) -> &str {
        "job-list"
    }

    fn label(&self) -> &str {
        "Job list"
    }

    fn category(&self) -> Category {
        Category::Jobs
    }

    fn default_props(&self) -> Props {
        props! {
            "title" => "Open positions",
            "layout" => "list",
            "limit" => 10,
            "department" => "",
            "emptyMessage" => "No open positions right now. Check back soon!",
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let limit = num_prop(node, "limit", 10.0).clamp(1.0, 100.0) as u32;
        let layout = match str_prop(node, "layout", "list") {
            "grid" => "grid",
            _ => "list",
        };

        VNode::element("div")
            .with_class(format!("rf-job-list rf-job-list--{layout}"))
            .with_attr("data-job-feed", "true")
            .with_attr("data-limit", limit.to_string())
            .with_attr_opt("data-department", opt_str_prop(node, "department"))
            .with_child(VNode::element("h2").with_text(str_prop(node, "title", "")))
            .with_child(
                VNode::element("p")
                    .with_class("rf-job-list__empty")
                    .with_text(str_prop(node, "emptyMessage", "")),
            )
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("title", "Title")
            .select("layout", "Layout", &[("list", "List"), ("grid", "Grid")])
            .number("limit", "Jobs shown", 1.0, 100.0)
            .text("department", "Department filter")
            .textarea("emptyMessage", "Empty message")
            .build()
    }
}

pub struct JobSearch;

impl BlockDefinition for JobSearch {
    fn key(&self) -> &str {
        "job-search"
    }

    fn label(&self) -> &str {
        "Job search"
    }

    fn category(&self) -> Category {
        Category::Jobs
    }

    fn default_props(&self) -> Props {
        props! {
            "placeholder" => "Job title or keyword",
            "buttonLabel" => "Search",
            "showLocation" => true,
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let mut form = VNode::element("form")
            .with_class("rf-job-search")
            .with_attr("action", "/jobs")
            .with_attr("method", "get")
            .with_attr("role", "search")
            .with_child(
                VNode::element("input")
                    .with_attr("type", "search")
                    .with_attr("name", "q")
                    .with_attr("placeholder", str_prop(node, "placeholder", "")),
            );
        if bool_prop(node, "showLocation", true) {
            form = form.with_child(
                VNode::element("input")
                    .with_attr("type", "text")
                    .with_attr("name", "location")
                    .with_attr("placeholder", "Location"),
            );
        }
        form.with_child(
            VNode::element("button")
                .with_attr("type", "submit")
                .with_class("rf-button rf-button--primary")
                .with_text(str_prop(node, "buttonLabel", "Search")),
        )
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("placeholder", "Placeholder")
            .text("buttonLabel", "Button label")
            .toggle("showLocation", "Location filter")
            .build()
    }
}

/// A single featured vacancy, edited by hand
pub struct JobCard;

impl BlockDefinition for JobCard {
    fn key(&self) -> &str {
        "job-card"
    }

    fn label(&self) -> &str {
        "Job card"
    }

    fn category(&self) -> Category {
        Category::Jobs
    }

    fn default_props(&self) -> Props {
        props! {
            "title" => "Senior Recruitment Consultant",
            "location" => "London",
            "salary" => "",
            "employmentType" => "Full-time",
            "href" => "#",
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let mut meta = VNode::element("ul")
            .with_class("rf-job-card__meta")
            .with_child(VNode::element("li").with_text(str_prop(node, "location", "")))
            .with_child(VNode::element("li").with_text(str_prop(node, "employmentType", "")));
        if let Some(salary) = opt_str_prop(node, "salary") {
            meta = meta.with_child(VNode::element("li").with_text(salary));
        }

        VNode::element("article")
            .with_class("rf-job-card")
            .with_child(
                VNode::element("h3").with_child(
                    VNode::element("a")
                        .with_attr("href", str_prop(node, "href", "#"))
                        .with_text(str_prop(node, "title", "")),
                ),
            )
            .with_child(meta)
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("title", "Job title")
            .text("location", "Location")
            .text("salary", "Salary")
            .select(
                "employmentType",
                "Employment type",
                &[
                    ("Full-time", "Full-time"),
                    ("Part-time", "Part-time"),
                    ("Contract", "Contract"),
                    ("Temporary", "Temporary"),
                ],
            )
            .url("href", "Link")
            .build()
    }
}

pub struct ApplyForm;

impl BlockDefinition for ApplyForm {
    fn key(&self) -> &str {
        "apply-form"
    }

    fn label(&self) -> &str {
        "Application form"
    }

    fn category(&self) -> Category {
        Category::Jobs
    }

    fn default_props(&self) -> Props {
        props! {
            "title" => "Apply now",
            "submitLabel" => "Submit application",
            "collectCoverLetter" => true,
            "collectPhone" => false,
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        fn field(label: &str, control: VNode) -> VNode {
            VNode::element("label")
                .with_class("rf-field")
                .with_child(VNode::element("span").with_text(label))
                .with_child(control.with_attr("required", "required"))
        }

        let input = |kind: &str, name: &str| {
            VNode::element("input")
                .with_attr("type", kind)
                .with_attr("name", name)
        };

        let mut fields = vec![
            field("Full name", input("text", "name")),
            field("Email", input("email", "email")),
        ];
        if bool_prop(node, "collectPhone", false) {
            fields.push(field("Phone", input("tel", "phone")));
        }
        fields.push(field("CV", input("file", "cv").with_attr("accept", ".pdf,.doc,.docx")));
        if bool_prop(node, "collectCoverLetter", true) {
            fields.push(
                VNode::element("label")
                    .with_class("rf-field")
                    .with_child(VNode::element("span").with_text("Cover letter"))
                    .with_child(VNode::element("textarea").with_attr("name", "coverLetter")),
            );
        }

        VNode::element("form")
            .with_class("rf-apply-form")
            .with_attr("method", "post")
            .with_attr("enctype", "multipart/form-data")
            .with_attr("data-apply", "true")
            .with_child(VNode::element("h2").with_text(str_prop(node, "title", "")))
            .with_children(fields)
            .with_child(
                VNode::element("button")
                    .with_attr("type", "submit")
                    .with_class("rf-button rf-button--primary")
                    .with_text(str_prop(node, "submitLabel", "Submit")),
            )
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("title", "Title")
            .text("submitLabel", "Button label")
            .toggle("collectCoverLetter", "Ask for cover letter")
            .toggle("collectPhone", "Ask for phone number")
            .build()
    }
}
