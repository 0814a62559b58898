use crate::view::Node;

/// Round profile image for people. Falls back to an initial when the
/// record carries no image.
pub fn avatar(image: Option<&str>, name: &str, radius: u32) -> Node {
	let element = Node::div("Avatar");
	match image {
		Some(image) => element.child(
			Node::element("img")
				.attr("src", image)
				.attr("alt", name)
				.attr("height", radius.to_string())
		),
		None => element.child(Node::element("span").class("initial").text(initial(name)))
	}.into()
}

/// Square logo treatment for organisations and collectives, linking out
/// to their website when one is known.
pub fn logo(image: Option<&str>, website: Option<&str>, name: &str, height: u32) -> Node {
	let visual: Node = match image {
		Some(image) => Node::element("img")
			.attr("src", image)
			.attr("alt", name)
			.attr("height", height.to_string())
			.into(),
		None => Node::element("span").class("initial").text(initial(name)).into()
	};
	match website {
		Some(website) => Node::element("a")
			.class("Logo")
			.attr("href", website)
			.attr("title", name)
			.child(visual),
		None => Node::div("Logo").child(visual)
	}.into()
}

fn initial(name: &str) -> String {
	name
		.chars()
		.next()
		.map_or_else(String::new, |character| character.to_uppercase().collect())
}
