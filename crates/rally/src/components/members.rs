use rally_models::{ CollectiveModel, DisplayMode, MemberModel };
use rally_util::format_currency;

use super::avatar;
use crate::view::Node;

pub struct MembersProps<'a> {
	pub members: &'a [MemberModel],
	pub collective: &'a CollectiveModel,
	/// Legacy free-text styling hint; only consulted when no explicit
	/// display mode is given.
	pub style_hint: Option<&'a str>,
	pub display_mode: Option<DisplayMode>
}

pub fn render(props: &MembersProps<'_>) -> Node {
	let mut members: Vec<&MemberModel> = props.members.iter().collect();
	members.sort_by(|a, b| b.stats.total_donations.cmp(&a.stats.total_donations));
	if members.is_empty() {
		return Node::element("div").into();
	}

	let size = if members.len() > 50 { "small" } else { "large" };
	let display_mode = props.display_mode.unwrap_or_else(||
		props.style_hint.map_or(DisplayMode::User, DisplayMode::from_style_hint)
	);

	let mut list = Node::div("Members");
	if let Some(hint) = props.style_hint {
		list = list.class(hint);
	}
	list
		.children(members
			.into_iter()
			.map(|member| member_card(member, props.collective, size, display_mode)))
		.into()
}

fn member_card(member: &MemberModel, collective: &CollectiveModel, size: &str, display_mode: DisplayMode) -> Node {
	let contributor = member.member.as_ref();
	let name = contributor.map_or("anonymous", |x| x.name.as_str());

	let mut card = Node::div("Member").class(size);
	card = card.child(match (display_mode, contributor) {
		(DisplayMode::Organization, Some(contributor)) =>
			avatar::logo(contributor.image.as_deref(), contributor.website.as_deref(), name, 64),
		_ => avatar::avatar(contributor.and_then(|x| x.image.as_deref()), name, 64)
	});
	if let Some(contributor) = contributor {
		card = card.child(
			Node::element("a")
				.class("name")
				.attr("href", format!("/{}", contributor.slug))
				.text(name)
		);
	}
	card
		.child(Node::div("totalDonations")
			.text(format_currency(member.stats.total_donations, &collective.currency, 0)))
		.into()
}

#[cfg(test)]
mod tests {
	use rally_models::{ CollectiveModel, CollectiveType, ContributorCollective, DisplayMode, MemberModel, MemberStats };

	use super::{ render, MembersProps };

	fn collective() -> CollectiveModel {
		CollectiveModel {
			id: 1,
			slug: "webpack".into(),
			name: "webpack".into(),
			currency: "USD".into(),
			is_active: true,
			host: None,
			image: None,
			website: None
		}
	}

	fn member(id: i64, name: &str, total_donations: i64) -> MemberModel {
		MemberModel {
			id,
			role: None,
			stats: MemberStats { total_donations },
			member: Some(ContributorCollective {
				id,
				slug: name.to_lowercase(),
				name: name.into(),
				kind: CollectiveType::User,
				image: None,
				website: None
			})
		}
	}

	fn names(node: &crate::view::Node) -> Vec<String> {
		node
			.as_element()
			.unwrap()
			.find_all("name")
			.into_iter()
			.map(|element| element.inner_text())
			.collect()
	}

	#[test]
	fn members_are_sorted_by_total_donations_descending() {
		let collective = collective();
		let members = vec![
			member(1, "Ada", 300),
			member(2, "Bo", 500),
			member(3, "Cy", 300)
		];
		let node = render(&MembersProps {
			members: &members,
			collective: &collective,
			style_hint: None,
			display_mode: None
		});
		// ties keep their input order, the sort is stable
		assert_eq!(names(&node), ["Bo", "Ada", "Cy"]);
	}

	#[test]
	fn an_empty_list_renders_an_empty_container() {
		let collective = collective();
		let node = render(&MembersProps {
			members: &[],
			collective: &collective,
			style_hint: None,
			display_mode: None
		});
		let element = node.as_element().unwrap();
		assert!(element.children.is_empty());
		assert!(element.find_all("Member").is_empty());
	}

	#[test]
	fn fifty_one_members_render_small_cards() {
		let collective = collective();
		let members: Vec<_> = (0..51).map(|i| member(i, "M", i)).collect();
		let node = render(&MembersProps {
			members: &members,
			collective: &collective,
			style_hint: None,
			display_mode: None
		});
		let cards = node.as_element().unwrap().find_all("Member");
		assert_eq!(cards.len(), 51);
		assert!(cards.iter().all(|card| card.has_class("small")));
	}

	#[test]
	fn fifty_members_render_large_cards() {
		let collective = collective();
		let members: Vec<_> = (0..50).map(|i| member(i, "M", i)).collect();
		let node = render(&MembersProps {
			members: &members,
			collective: &collective,
			style_hint: None,
			display_mode: None
		});
		assert!(node
			.as_element()
			.unwrap()
			.find_all("Member")
			.iter()
			.all(|card| card.has_class("large")));
	}

	#[test]
	fn sponsor_hints_switch_to_the_logo_treatment() {
		let collective = collective();
		let members = vec![member(1, "Acme", 100)];
		let node = render(&MembersProps {
			members: &members,
			collective: &collective,
			style_hint: Some("sponsors-grid"),
			display_mode: None
		});
		let element = node.as_element().unwrap();
		assert_eq!(element.find_all("Logo").len(), 1);
		assert!(element.find_all("Avatar").is_empty());
	}

	#[test]
	fn an_explicit_display_mode_wins_over_the_hint() {
		let collective = collective();
		let members = vec![member(1, "Acme", 100)];
		let node = render(&MembersProps {
			members: &members,
			collective: &collective,
			style_hint: Some("sponsors-grid"),
			display_mode: Some(DisplayMode::User)
		});
		assert_eq!(node.as_element().unwrap().find_all("Avatar").len(), 1);
	}
}
