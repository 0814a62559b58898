use crate::view::Node;

pub fn render() -> Node {
	Node::div("SignInForm")
		.child(Node::div("prompt").text("Sign in or create an account to continue"))
		.child(Node::element("a").class("signin").attr("href", "/signin").text("Sign In"))
		.into()
}
