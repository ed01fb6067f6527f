//! Content blocks: text, media and the marketing sections agencies
//! assemble their career sites from.

use crate::fields::{Fields, InspectorField};
use crate::props::{array_prop, bool_prop, item_str, num_prop, opt_str_prop, px, str_prop};
use crate::registry::{BlockDefinition, Category, Registry};
use recruitify_common::{props, BuilderNode, Props, VNode};

pub(crate) fn register(registry: &mut Registry) {
    registry
        .register(Heading)
        .register(Text)
        .register(Image)
        .register(Button)
        .register(Hero)
        .register(FeatureList)
        .register(Testimonial)
        .register(Stats)
        .register(Faq)
        .register(LogoCloud)
        .register(Video)
        .register(CtaBanner)
        .register(Navbar)
        .register(Footer);
}

const TEXT_ALIGN: &[(&str, &str)] = &[("left", "Left"), ("center", "Center"), ("right", "Right")];

/// Sub-fields shared by nav and footer link lists
const LINK_FIELDS: &[(&str, &str)] = &[("label", "Label"), ("href", "Link")];

fn link(label: &str, href: &str) -> VNode {
    VNode::element("a").with_attr("href", href).with_text(label)
}

fn link_list(items: &[serde_json::Value], class: &str) -> VNode {
    VNode::element("nav").with_class(class).with_children(
        items
            .iter()
            .map(|item| link(item_str(item, "label"), item_str(item, "href"))),
    )
}

pub struct Heading;

impl BlockDefinition for Heading {
    fn key(&self) -> &str {
        "heading"
    }

    fn label(&self) -> &str {
        "Heading"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! { "text" => "Your headline", "level" => "h2", "align" => "left", "color" => "" }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let tag = match str_prop(node, "level", "h2") {
            level @ ("h1" | "h2" | "h3" | "h4") => level,
            _ => "h2",
        };

        VNode::element(tag)
            .with_class("rf-heading")
            .with_style("text-align", str_prop(node, "align", "left"))
            .with_style_opt("color", opt_str_prop(node, "color"))
            .with_text(str_prop(node, "text", ""))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("text", "Text")
            .select(
                "level",
                "Level",
                &[("h1", "Heading 1"), ("h2", "Heading 2"), ("h3", "Heading 3"), ("h4", "Heading 4")],
            )
            .select("align", "Alignment", TEXT_ALIGN)
            .color("color", "Color")
            .build()
    }
}

pub struct Text;

impl BlockDefinition for Text {
    fn key(&self) -> &str {
        "text"
    }

    fn label(&self) -> &str {
        "Text"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "text" => "Tell candidates what makes your agency different.",
            "align" => "left",
            "size" => "md",
            "color" => "",
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("p")
            .with_class(format!("rf-text rf-text--{}", str_prop(node, "size", "md")))
            .with_style("text-align", str_prop(node, "align", "left"))
            .with_style_opt("color", opt_str_prop(node, "color"))
            .with_text(str_prop(node, "text", ""))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .textarea("text", "Text")
            .select("size", "Size", &[("sm", "Small"), ("md", "Medium"), ("lg", "Large")])
            .select("align", "Alignment", TEXT_ALIGN)
            .color("color", "Color")
            .build()
    }
}

pub struct Image;

impl BlockDefinition for Image {
    fn key(&self) -> &str {
        "image"
    }

    fn label(&self) -> &str {
        "Image"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! { "src" => "", "alt" => "", "width" => "100%", "radius" => 0 }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        match opt_str_prop(node, "src") {
            Some(src) => VNode::element("img")
                .with_class("rf-image")
                .with_attr("src", src)
                .with_attr("alt", str_prop(node, "alt", ""))
                .with_style("width", str_prop(node, "width", "100%"))
                .with_style("border-radius", px(num_prop(node, "radius", 0.0))),
            None => VNode::element("div")
                .with_class("rf-image rf-image--empty")
                .with_text("Add an image"),
        }
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .url("src", "Image URL")
            .text("alt", "Alt text")
            .text("width", "Width")
            .number("radius", "Corner radius", 0.0, 64.0)
            .build()
    }
}

/// Renders as a submit control inside a form, as a link everywhere else
pub struct Button;

impl BlockDefinition for Button {
    fn key(&self) -> &str {
        "button"
    }

    fn label(&self) -> &str {
        "Button"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! { "label" => "Click me", "href" => "#", "variant" => "primary" }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, parent_type: Option<&str>) -> VNode {
        let class = format!("rf-button rf-button--{}", str_prop(node, "variant", "primary"));
        let label = str_prop(node, "label", "");

        if parent_type == Some("form") {
            VNode::element("button")
                .with_attr("type", "submit")
                .with_class(class)
                .with_text(label)
        } else {
            VNode::element("a")
                .with_attr("href", str_prop(node, "href", "#"))
                .with_class(class)
                .with_text(label)
        }
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("label", "Label")
            .url("href", "Link")
            .select(
                "variant",
                "Style",
                &[("primary", "Primary"), ("secondary", "Secondary"), ("outline", "Outline")],
            )
            .build()
    }
}

pub struct Hero;

impl BlockDefinition for Hero {
    fn key(&self) -> &str {
        "hero"
    }

    fn label(&self) -> &str {
        "Hero"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "title" => "Find your next role",
            "subtitle" => "Hand-picked opportunities from the employers we partner with.",
            "ctaLabel" => "Browse jobs",
            "ctaHref" => "/jobs",
            "background" => "#0f172a",
            "textColor" => "#ffffff",
            "backgroundImage" => "",
            "align" => "center",
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let mut hero = VNode::element("header")
            .with_class("rf-hero")
            .with_style_opt("background-color", opt_str_prop(node, "background"))
            .with_style_opt("color", opt_str_prop(node, "textColor"))
            .with_style("text-align", str_prop(node, "align", "center"));
        if let Some(image) = opt_str_prop(node, "backgroundImage") {
            hero = hero
                .with_style("background-image", format!("url('{image}')"))
                .with_style("background-size", "cover");
        }

        let mut content = vec![
            VNode::element("h1").with_text(str_prop(node, "title", "")),
            VNode::element("p")
                .with_class("rf-hero__subtitle")
                .with_text(str_prop(node, "subtitle", "")),
        ];
        if let Some(cta) = opt_str_prop(node, "ctaLabel") {
            content.push(
                VNode::element("a")
                    .with_class("rf-button rf-button--primary")
                    .with_attr("href", str_prop(node, "ctaHref", "#"))
                    .with_text(cta),
            );
        }

        hero.with_children(content)
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("title", "Title")
            .textarea("subtitle", "Subtitle")
            .text("ctaLabel", "Button label")
            .url("ctaHref", "Button link")
            .color("background", "Background")
            .color("textColor", "Text color")
            .url("backgroundImage", "Background image")
            .select("align", "Alignment", TEXT_ALIGN)
            .build()
    }
}

pub struct FeatureList;

impl BlockDefinition for FeatureList {
    fn key(&self) -> &str {
        "feature-list"
    }

    fn label(&self) -> &str {
        "Feature list"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "title" => "Why work with us",
            "items" => [
                { "title": "Specialist consultants", "description": "Recruiters who know your industry inside out." },
                { "title": "Exclusive roles", "description": "Positions you will not find on job boards." },
                { "title": "Career support", "description": "CV reviews and interview coaching at no cost." }
            ],
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let items = array_prop(node, "items").iter().map(|item| {
            VNode::element("li")
                .with_class("rf-feature")
                .with_child(VNode::element("h3").with_text(item_str(item, "title")))
                .with_child(VNode::element("p").with_text(item_str(item, "description")))
        });

        VNode::element("div")
            .with_class("rf-feature-list")
            .with_child(VNode::element("h2").with_text(str_prop(node, "title", "")))
            .with_child(VNode::element("ul").with_children(items))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("title", "Title")
            .list("items", "Features", &[("title", "Title"), ("description", "Description")])
            .build()
    }
}

pub struct Testimonial;

impl BlockDefinition for Testimonial {
    fn key(&self) -> &str {
        "testimonial"
    }

    fn label(&self) -> &str {
        "Testimonial"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "quote" => "They found me a role I love within two weeks.",
            "author" => "Alex Morgan",
            "role" => "Placed as Product Designer",
            "avatar" => "",
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let mut caption = VNode::element("figcaption");
        if let Some(avatar) = opt_str_prop(node, "avatar") {
            caption = caption.with_child(
                VNode::element("img")
                    .with_class("rf-avatar")
                    .with_attr("src", avatar)
                    .with_attr("alt", str_prop(node, "author", "")),
            );
        }
        caption = caption
            .with_child(VNode::element("strong").with_text(str_prop(node, "author", "")))
            .with_child(VNode::element("span").with_text(str_prop(node, "role", "")));

        VNode::element("figure")
            .with_class("rf-testimonial")
            .with_child(VNode::element("blockquote").with_text(str_prop(node, "quote", "")))
            .with_child(caption)
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .textarea("quote", "Quote")
            .text("author", "Author")
            .text("role", "Role")
            .url("avatar", "Avatar URL")
            .build()
    }
}

pub struct Stats;

impl BlockDefinition for Stats {
    fn key(&self) -> &str {
        "stats"
    }

    fn label(&self) -> &str {
        "Stats"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "items" => [
                { "value": "500+", "label": "Candidates placed" },
                { "value": "120", "label": "Partner employers" },
                { "value": "15", "label": "Years in business" }
            ],
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("dl")
            .with_class("rf-stats")
            .with_children(array_prop(node, "items").iter().map(|item| {
                VNode::element("div")
                    .with_class("rf-stat")
                    .with_child(VNode::element("dt").with_text(item_str(item, "label")))
                    .with_child(VNode::element("dd").with_text(item_str(item, "value")))
            }))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .list("items", "Stats", &[("value", "Value"), ("label", "Label")])
            .build()
    }
}

pub struct Faq;

impl BlockDefinition for Faq {
    fn key(&self) -> &str {
        "faq"
    }

    fn label(&self) -> &str {
        "FAQ"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "title" => "Frequently asked questions",
            "items" => [
                { "question": "Do you charge candidates?", "answer": "Never. Our fees are paid by employers." },
                { "question": "How long does the process take?", "answer": "Most placements complete within four weeks." }
            ],
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("div")
            .with_class("rf-faq")
            .with_child(VNode::element("h2").with_text(str_prop(node, "title", "")))
            .with_children(array_prop(node, "items").iter().map(|item| {
                VNode::element("details")
                    .with_child(VNode::element("summary").with_text(item_str(item, "question")))
                    .with_child(VNode::element("p").with_text(item_str(item, "answer")))
            }))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("title", "Title")
            .list("items", "Questions", &[("question", "Question"), ("answer", "Answer")])
            .build()
    }
}

pub struct LogoCloud;

impl BlockDefinition for LogoCloud {
    fn key(&self) -> &str {
        "logo-cloud"
    }

    fn label(&self) -> &str {
        "Logo cloud"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! { "title" => "Trusted by leading employers", "logos" => [], "grayscale" => true }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let logos = array_prop(node, "logos");
        let class = if bool_prop(node, "grayscale", true) {
            "rf-logo-cloud rf-logo-cloud--grayscale"
        } else {
            "rf-logo-cloud"
        };

        let body = if logos.is_empty() {
            VNode::element("p")
                .with_class("rf-logo-cloud__empty")
                .with_text("Add employer logos")
        } else {
            VNode::element("div").with_class("rf-logo-cloud__logos").with_children(
                logos.iter().map(|logo| {
                    VNode::element("img")
                        .with_attr("src", item_str(logo, "src"))
                        .with_attr("alt", item_str(logo, "alt"))
                }),
            )
        };

        VNode::element("div")
            .with_class(class)
            .with_child(VNode::element("p").with_text(str_prop(node, "title", "")))
            .with_child(body)
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("title", "Title")
            .list("logos", "Logos", &[("src", "Logo URL"), ("alt", "Company name")])
            .toggle("grayscale", "Grayscale")
            .build()
    }
}

pub struct Video;

impl BlockDefinition for Video {
    fn key(&self) -> &str {
        "video"
    }

    fn label(&self) -> &str {
        "Video"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! { "url" => "", "caption" => "" }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let player = match opt_str_prop(node, "url") {
            Some(url) => VNode::element("iframe")
                .with_attr("src", url)
                .with_attr("title", str_prop(node, "caption", "Video"))
                .with_attr("allowfullscreen", "true")
                .with_attr("loading", "lazy"),
            None => VNode::element("div")
                .with_class("rf-video--empty")
                .with_text("Add a video URL"),
        };

        let mut figure = VNode::element("figure").with_class("rf-video").with_child(player);
        if let Some(caption) = opt_str_prop(node, "caption") {
            figure = figure.with_child(VNode::element("figcaption").with_text(caption));
        }
        figure
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .url("url", "Embed URL")
            .text("caption", "Caption")
            .build()
    }
}

pub struct CtaBanner;

impl BlockDefinition for CtaBanner {
    fn key(&self) -> &str {
        "cta-banner"
    }

    fn label(&self) -> &str {
        "Call to action"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "title" => "Ready for your next move?",
            "text" => "Register with us and hear about roles first.",
            "buttonLabel" => "Register now",
            "buttonHref" => "/register",
            "background" => "#2563eb",
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("aside")
            .with_class("rf-cta")
            .with_style_opt("background", opt_str_prop(node, "background"))
            .with_child(VNode::element("h2").with_text(str_prop(node, "title", "")))
            .with_child(VNode::element("p").with_text(str_prop(node, "text", "")))
            .with_child(
                link(str_prop(node, "buttonLabel", ""), str_prop(node, "buttonHref", "#"))
                    .with_class("rf-button rf-button--secondary"),
            )
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("title", "Title")
            .textarea("text", "Text")
            .text("buttonLabel", "Button label")
            .url("buttonHref", "Button link")
            .color("background", "Background")
            .build()
    }
}

pub struct Navbar;

impl BlockDefinition for Navbar {
    fn key(&self) -> &str {
        "navbar"
    }

    fn label(&self) -> &str {
        "Navigation bar"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "brand" => "Your Agency",
            "logo" => "",
            "links" => [
                { "label": "Jobs", "href": "/jobs" },
                { "label": "About", "href": "/about" },
                { "label": "Contact", "href": "/contact" }
            ],
            "sticky" => false,
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        let brand = match opt_str_prop(node, "logo") {
            Some(logo) => VNode::element("img")
                .with_attr("src", logo)
                .with_attr("alt", str_prop(node, "brand", "")),
            None => VNode::text(str_prop(node, "brand", "")),
        };

        let mut bar = VNode::element("div")
            .with_class("rf-navbar")
            .with_child(
                VNode::element("a")
                    .with_class("rf-navbar__brand")
                    .with_attr("href", "/")
                    .with_child(brand),
            )
            .with_child(link_list(array_prop(node, "links"), "rf-navbar__links"));
        if bool_prop(node, "sticky", false) {
            bar = bar.with_style("position", "sticky").with_style("top", "0");
        }
        bar
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("brand", "Brand name")
            .url("logo", "Logo URL")
            .list("links", "Links", LINK_FIELDS)
            .toggle("sticky", "Sticky")
            .build()
    }
}

pub struct Footer;

impl BlockDefinition for Footer {
    fn key(&self) -> &str {
        "footer"
    }

    fn label(&self) -> &str {
        "Footer"
    }

    fn category(&self) -> Category {
        Category::Content
    }

    fn default_props(&self) -> Props {
        props! {
            "text" => "© Your Agency. All rights reserved.",
            "links" => [
                { "label": "Privacy", "href": "/privacy" },
                { "label": "Terms", "href": "/terms" }
            ],
        }
    }

    fn render(&self, node: &BuilderNode, _children: Vec<VNode>, _parent: Option<&str>) -> VNode {
        VNode::element("footer")
            .with_class("rf-footer")
            .with_child(link_list(array_prop(node, "links"), "rf-footer__links"))
            .with_child(VNode::element("small").with_text(str_prop(node, "text", "")))
    }

    fn inspect(&self, node: &BuilderNode) -> Vec<InspectorField> {
        Fields::of(node)
            .text("text", "Text")
            .list("links", "Links", LINK_FIELDS)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_default_text() {
        let node = Heading.create();
        assert_eq!(node.prop_str("text"), Some("Your headline"));

        let vnode = Heading.render(&node, vec![], Some("root"));
        assert_eq!(vnode.tag(), Some("h2"));
        assert_eq!(vnode.text_content(), "Your headline");
    }

    #[test]
    fn test_heading_rejects_unknown_level() {
        let mut node = Heading.create();
        node.props.insert("level".into(), "script".into());

        assert_eq!(Heading.render(&node, vec![], None).tag(), Some("h2"));
    }

    #[test]
    fn test_button_adapts_to_form_parent() {
        let node = Button.create();

        let in_form = Button.render(&node, vec![], Some("form"));
        assert_eq!(in_form.tag(), Some("button"));
        assert_eq!(in_form.attr("type"), Some("submit"));

        let standalone = Button.render(&node, vec![], Some("section"));
        assert_eq!(standalone.tag(), Some("a"));
        assert_eq!(standalone.attr("href"), Some("#"));
    }

    #[test]
    fn test_image_without_src_shows_hint() {
        let node = Image.create();
        let vnode = Image.render(&node, vec![], None);

        assert_eq!(vnode.tag(), Some("div"));
        assert_eq!(vnode.text_content(), "Add an image");
    }

    #[test]
    fn test_feature_list_renders_every_item() {
        let node = FeatureList.create();
        let vnode = FeatureList.render(&node, vec![], None);

        assert_eq!(vnode.find_all(&|n| n.tag() == Some("li")).len(), 3);
    }

    #[test]
    fn test_navbar_links() {
        let node = Navbar.create();
        let vnode = Navbar.render(&node, vec![], None);

        let links = vnode.find_all(&|n| n.tag() == Some("a"));
        // brand + three links
        assert_eq!(links.len(), 4);
        assert_eq!(links[1].attr("href"), Some("/jobs"));
    }

    #[test]
    fn test_list_fields_expose_items() {
        let node = Faq.create();
        let fields = Faq.inspect(&node);
        let items = fields.iter().find(|f| f.key == "items").unwrap();

        assert_eq!(items.value.as_array().unwrap().len(), 2);
    }
}
