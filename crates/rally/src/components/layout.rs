use rally_models::UserModel;
use rally_util::WEBSITE_URL;

use crate::view::Node;

pub fn header(title: &str, loading: bool, logged_in_user: Option<&UserModel>) -> Node {
	let mut element = Node::div("Header");
	if loading {
		element = element.class("loading");
	}
	element
		.child(Node::element("h2").class("title").text(title))
		.child(match logged_in_user {
			Some(user) => Node::div("LoginTopBarProfileButton").text(user.display_name()),
			None => Node::div("LoginTopBar")
				.child(Node::element("a").attr("href", "/signin").text("Sign In"))
		})
		.into()
}

pub fn body(children: Vec<Node>) -> Node {
	Node::div("Body").children(children).into()
}

pub fn footer() -> Node {
	Node::element("footer")
		.class("Footer")
		.child(Node::element("a").attr("href", WEBSITE_URL.clone()).text("rally"))
		.text("made by people who give a damn")
		.into()
}

pub fn page(title: &str, loading: bool, logged_in_user: Option<&UserModel>, content: Vec<Node>) -> Node {
	Node::div("page")
		.child(header(title, loading, logged_in_user))
		.child(body(content))
		.child(footer())
		.into()
}

/// Loading and error states replace the entire page body, the site never
/// degrades a page inline.
pub fn error_page(loading: bool, message: Option<&str>) -> Node {
	if loading {
		return Node::div("ErrorPage")
			.class("loading")
			.child(Node::div("loading-text").text("Loading"))
			.into();
	}

	Node::div("ErrorPage")
		.child(Node::div("message").text(message.unwrap_or("An unexpected error has occurred")))
		.into()
}
