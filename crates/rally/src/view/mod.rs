use std::fmt::Write as _;

/// A rendered fragment. Components build trees of these; the HTTP layer
/// serialises them, tests inspect them directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
	Element(Element),
	Text(String)
}

impl Node {
	pub fn element(tag: &'static str) -> Element {
		Element::new(tag)
	}

	pub fn div(class: impl Into<String>) -> Element {
		Element::new("div").class(class)
	}

	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			Self::Text(_) => None
		}
	}

	pub fn render(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		match self {
			Self::Element(element) => element.write_html(output),
			Self::Text(text) => output.push_str(&escape(text))
		}
	}
}

impl From<Element> for Node {
	fn from(value: Element) -> Self {
		Self::Element(value)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
	pub tag: &'static str,
	pub classes: Vec<String>,
	pub attributes: Vec<(&'static str, String)>,
	pub children: Vec<Node>
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

impl Element {
	pub fn new(tag: &'static str) -> Self {
		Self {
			tag,
			classes: vec![],
			attributes: vec![],
			children: vec![]
		}
	}

	pub fn class(mut self, class: impl Into<String>) -> Self {
		let class = class.into();
		if !class.is_empty() {
			self.classes.push(class);
		}
		self
	}

	pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.attributes.push((name, value.into()));
		self
	}

	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
		self.children.extend(children);
		self
	}

	pub fn text(self, value: impl Into<String>) -> Self {
		self.child(Node::Text(value.into()))
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|x| x == class)
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(key, _)| *key == name)
			.map(|(_, value)| value.as_str())
	}

	pub fn elements(&self) -> impl Iterator<Item = &Element> {
		self.children.iter().filter_map(Node::as_element)
	}

	/// Depth-first collection of descendant elements carrying a class.
	pub fn find_all(&self, class: &str) -> Vec<&Element> {
		let mut found = vec![];
		self.collect_with_class(class, &mut found);
		found
	}

	fn collect_with_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
		for element in self.elements() {
			if element.has_class(class) {
				found.push(element);
			}
			element.collect_with_class(class, found);
		}
	}

	pub fn inner_text(&self) -> String {
		let mut output = String::new();
		self.collect_text(&mut output);
		output
	}

	fn collect_text(&self, output: &mut String) {
		for child in &self.children {
			match child {
				Node::Text(text) => output.push_str(text),
				Node::Element(element) => element.collect_text(output)
			}
		}
	}

	pub fn render(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		output.push('<');
		output.push_str(self.tag);
		if !self.classes.is_empty() {
			let _ = write!(output, " class=\"{}\"", escape(&self.classes.join(" ")));
		}
		for (name, value) in &self.attributes {
			let _ = write!(output, " {name}=\"{}\"", escape(value));
		}
		if VOID_TAGS.contains(&self.tag) {
			output.push_str(" />");
			return;
		}

		output.push('>');
		for child in &self.children {
			child.write_html(output);
		}
		let _ = write!(output, "</{}>", self.tag);
	}
}

fn escape(value: &str) -> String {
	let mut output = String::with_capacity(value.len());
	for character in value.chars() {
		match character {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			_ => output.push(character)
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::Node;

	#[test]
	fn renders_nested_elements() {
		let node: Node = Node::div("Members")
			.child(Node::div("Member").text("jan"))
			.into();
		assert_eq!(node.render(), "<div class=\"Members\"><div class=\"Member\">jan</div></div>");
	}

	#[test]
	fn escapes_text_and_attributes() {
		let node: Node = Node::element("a")
			.attr("title", "a \"quoted\" <name>")
			.text("fish & chips")
			.into();
		assert_eq!(
			node.render(),
			"<a title=\"a &quot;quoted&quot; &lt;name&gt;\">fish &amp; chips</a>"
		);
	}

	#[test]
	fn void_tags_have_no_closing_tag() {
		let node: Node = Node::element("img").attr("src", "/x.png").into();
		assert_eq!(node.render(), "<img src=\"/x.png\" />");
	}

	#[test]
	fn find_all_walks_the_whole_tree() {
		let tree = Node::div("root")
			.child(Node::div("card").text("a"))
			.child(Node::div("wrap").child(Node::div("card").text("b")));
		assert_eq!(tree.find_all("card").len(), 2);
		assert_eq!(tree.inner_text(), "ab");
	}
}
