//! Renderable view tree.

use std::borrow::Cow;

/// Renderable content produced by a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// An HTML element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// An HTML element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
	is_void: bool,
}

impl ElementView {
	/// Creates an element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
				| "source" | "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child.
	pub fn child(mut self, child: impl Into<View>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Adds several children.
	pub fn children<I, V>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<View>,
	{
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the value of attribute `name`.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}
}

impl View {
	/// Creates an element builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment<I, V>(children: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<View>,
	{
		Self::Fragment(children.into_iter().map(Into::into).collect())
	}

	/// Renders the view to HTML, escaping text and attribute values.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(&el.tag);
				for (name, value) in &el.attrs {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}
				if el.is_void {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in &el.children {
						child.render_into(output);
					}
					output.push_str("</");
					output.push_str(&el.tag);
					output.push('>');
				}
			}
			View::Text(text) => output.push_str(&html_escape(text)),
			View::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			View::Empty => {}
		}
	}

	/// Collects the concatenated text content.
	pub fn text_content(&self) -> String {
		match self {
			View::Element(el) => el.children.iter().map(View::text_content).collect(),
			View::Text(text) => text.to_string(),
			View::Fragment(children) => children.iter().map(View::text_content).collect(),
			View::Empty => String::new(),
		}
	}
}

impl From<ElementView> for View {
	fn from(el: ElementView) -> Self {
		View::Element(el)
	}
}

impl From<&'static str> for View {
	fn from(text: &'static str) -> Self {
		View::Text(Cow::Borrowed(text))
	}
}

impl From<String> for View {
	fn from(text: String) -> Self {
		View::Text(Cow::Owned(text))
	}
}

fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
