use recruitify_blocks::{render_root, unknown_block, Registry};
use recruitify_common::{count_nodes, BuilderNode, VNode, ROOT_TYPE};
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Document root has type `{0}`, expected `root`")]
    InvalidRoot(String),

    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Definitions that replace or extend the standard registry
    pub registry: Option<Registry>,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Page title for full documents
    pub title: Option<String>,
    /// Wrap the page in `<!DOCTYPE html>`, `<head>` and `<body>`
    pub full_document: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            registry: None,
            pretty: true,
            indent: "  ".to_string(),
            title: None,
            full_document: true,
        }
    }
}

impl CompileOptions {
    /// Standard registry with any overrides applied
    fn effective_registry(&self) -> Registry {
        let standard = Registry::standard();
        match &self.registry {
            Some(overrides) => standard.merged_with(overrides),
            None => standard,
        }
    }
}

struct Context<'a> {
    options: &'a CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Read-only projection of a stored tree. Node types missing from
/// `registry` render a visible placeholder.
pub fn render_tree(tree: &BuilderNode, registry: &Registry) -> VNode {
    if tree.node_type == ROOT_TYPE {
        render_root(render_children(tree, registry))
    } else {
        render_node(tree, None, registry)
    }
}

fn render_children(node: &BuilderNode, registry: &Registry) -> Vec<VNode> {
    node.children()
        .iter()
        .map(|child| render_node(child, Some(&node.node_type), registry))
        .collect()
}

fn render_node(node: &BuilderNode, parent_type: Option<&str>, registry: &Registry) -> VNode {
    match registry.get(&node.node_type) {
        Some(definition) => definition.render(node, render_children(node, registry), parent_type),
        None => {
            tracing::warn!(node_id = %node.id, node_type = %node.node_type, "unknown block type");
            unknown_block(&node.node_type)
        }
    }
}

/// Compile a page tree to HTML
pub fn compile_to_html(tree: &BuilderNode, options: &CompileOptions) -> Result<String, CompileError> {
    if tree.node_type != ROOT_TYPE {
        return Err(CompileError::InvalidRoot(tree.node_type.clone()));
    }

    let registry = options.effective_registry();
    let page = render_tree(tree, &registry);
    tracing::debug!(nodes = count_nodes(tree), "compiling page");

    let mut ctx = Context::new(options);
    if options.full_document {
        ctx.add_line("<!DOCTYPE html>");
        ctx.add_line("<html lang=\"en\">");
        ctx.indent();
        compile_head(&mut ctx);
        ctx.add_line("<body>");
        ctx.indent();
        compile_vnode(&page, &mut ctx);
        ctx.dedent();
        ctx.add_line("</body>");
        ctx.dedent();
        ctx.add_line("</html>");
    } else {
        compile_vnode(&page, &mut ctx);
    }

    Ok(ctx.get_output())
}

/// Parse a stored document and compile it
pub fn compile_json_to_html(json: &str, options: &CompileOptions) -> Result<String, CompileError> {
    let tree = BuilderNode::from_json(json)?;
    compile_to_html(&tree, options)
}

/// Serialize a virtual DOM node without a document wrapper
pub fn vnode_to_html(vnode: &VNode, options: &CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_vnode(vnode, &mut ctx);
    ctx.get_output()
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = escape_html(ctx.options.title.as_deref().unwrap_or("Careers"));
    ctx.add_line(&format!("<title>{}</title>", title));

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_vnode(vnode: &VNode, ctx: &mut Context) {
    match vnode {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => compile_tag(tag, attributes, styles, children, ctx),

        VNode::Text { content } => ctx.add_line(&escape_html(content)),

        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", content.replace("--", "- -")));
        }

        VNode::Fragment { children } => {
            for child in children {
                compile_vnode(child, ctx);
            }
        }
    }
}

fn compile_tag(
    name: &str,
    attributes: &std::collections::BTreeMap<String, String>,
    styles: &std::collections::BTreeMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", name));

    for (attr_name, value) in attributes {
        ctx.add(&format!(" {}=\"{}\"", attr_name, escape_html(value)));
    }

    if !styles.is_empty() {
        let style = styles
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("; ");
        ctx.add(&format!(" style=\"{}\"", escape_html(&style)));
    }

    if children.is_empty() && is_self_closing(name) {
        ctx.add(" />");
        ctx.newline();
        return;
    }

    ctx.add(">");

    if has_element_children(children) {
        ctx.newline();
        ctx.indent();
        for child in children {
            compile_vnode(child, ctx);
        }
        ctx.dedent();
        if ctx.options.pretty {
            ctx.add_indent();
        }
    } else {
        // text-only content stays on the tag's line
        for child in children {
            if let VNode::Text { content } = child {
                ctx.add(&escape_html(content));
            }
        }
    }

    ctx.add(&format!("</{}>", name));
    ctx.newline();
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, VNode::Text { .. }))
}
