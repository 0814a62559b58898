use actix_web::{
	Responder, HttpRequest, HttpResponse,
	get, web
};
use rally_cache::CACHE;
use rally_models::{ MemberModel, TierModel };
use serde::Deserialize;

use super::{ ApiError, ApiResult };
use crate::{
	components::{
		members::{ self, MembersProps },
		tier_card::TierCard
	},
	pages::{
		complete_pledge::CompletePledgePage,
		subscriptions::SubscriptionsPage,
		ApiIdentityProvider, PageSession
	},
	router::PageRouter,
	view::Node
};

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
		.service(index)
		.service(complete_pledge)
		.service(subscriptions)
		.service(collective_members)
		.service(contribute);
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().body(format!("hello from rally v{CARGO_PKG_VERSION}!\nhttps://github.com/rally-hq/rally"))
}

fn session_token(request: &HttpRequest) -> Option<String> {
	if let Some(cookie) = request.cookie("rally_session") {
		return Some(cookie.value().to_owned());
	}
	request.headers()
		.get("x-rally-session")
		.and_then(|value| value.to_str().ok())
		.map(str::to_owned)
}

fn html_response(title: &str, node: &Node) -> HttpResponse {
	HttpResponse::Ok()
		.content_type("text/html; charset=utf-8")
		.body(format!(
			"<!DOCTYPE html><html><head><meta charset=\"utf-8\" /><title>{title}</title></head><body>{}</body></html>",
			node.render()
		))
}

#[get("/pledges/{id}/complete")]
async fn complete_pledge(request: HttpRequest, path: web::Path<i64>) -> ApiResult<HttpResponse> {
	let mut session = PageSession::new(session_token(&request));
	let page = CompletePledgePage { order_id: path.into_inner() };
	let node = page.render(&mut session, &ApiIdentityProvider).await?;
	Ok(html_response("Complete Pledge", &node))
}

#[get("/collectives/{slug}/subscriptions")]
async fn subscriptions(request: HttpRequest, path: web::Path<String>) -> ApiResult<HttpResponse> {
	let mut session = PageSession::new(session_token(&request));
	let page = SubscriptionsPage { slug: path.into_inner() };
	let node = page.render(&mut session, &ApiIdentityProvider).await?;
	Ok(html_response("Subscriptions", &node))
}

#[derive(Deserialize)]
struct MembersQuery {
	style: Option<String>
}

#[get("/collectives/{slug}/members")]
async fn collective_members(path: web::Path<String>, query: web::Query<MembersQuery>) -> ApiResult<HttpResponse> {
	let slug = path.into_inner();
	let collective = CACHE.api
		.collective(&slug)
		.await
		.map_err(|_| ApiError::CollectiveNotFound)?;
	let members = MemberModel::for_collective(&slug)
		.await
		.map_err(|_| ApiError::InternalError)?;

	let node = members::render(&MembersProps {
		members: &members,
		collective: &collective,
		style_hint: query.style.as_deref(),
		display_mode: None
	});
	Ok(html_response(&format!("{slug} members"), &node))
}

#[derive(Deserialize)]
struct ContributeQuery {
	referral: Option<String>
}

// click-through for a tier card's action link: replay the card's click
// handling server-side and answer with the navigation it performed, or
// render the card back with its tooltip when the click was suppressed
#[get("/collectives/{slug}/tiers/{tier_id}/contribute")]
async fn contribute(path: web::Path<(String, i64)>, query: web::Query<ContributeQuery>) -> ApiResult<HttpResponse> {
	let (slug, tier_id) = path.into_inner();
	let collective = CACHE.api
		.collective(&slug)
		.await
		.map_err(|_| ApiError::CollectiveNotFound)?;
	let tiers = TierModel::for_collective(&slug)
		.await
		.map_err(|_| ApiError::InternalError)?;
	let tier = tiers
		.iter()
		.find(|tier| tier.id == tier_id)
		.ok_or(ApiError::TierNotFound)?;

	let card = TierCard {
		tier,
		collective: &collective,
		referral: query.referral.as_deref()
	};
	let router = PageRouter::default();
	card.on_action_click(&router).await?;

	Ok(match router.take_target() {
		Some(target) => HttpResponse::SeeOther()
			.insert_header(("location", target))
			.finish(),
		None => html_response(&collective.name, &card.render()?)
	})
}
