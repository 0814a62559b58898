use dashmap::DashMap;
use rally_models::CollectiveModel;

use crate::Result;

/// Get-or-fetch store for remote records that change slowly enough to
/// serve from memory. Orders and subscriptions are visitor-specific and
/// are always fetched fresh, so they do not live here.
#[derive(Default)]
pub struct ApiCache {
	pub collectives: DashMap<String, CollectiveModel>
}

impl ApiCache {
	// hands out owned snapshots; a map guard held across an await would
	// wedge a single-threaded caller against its own shard
	pub async fn collective(&self, slug: &str) -> Result<CollectiveModel> {
		if let Some(model) = self.collectives.get(slug) {
			return Ok(model.clone());
		}

		let new_model = CollectiveModel::get(slug)
			.await?;
		self.collectives.insert(slug.to_owned(), new_model.clone());
		Ok(new_model)
	}

	pub fn invalidate_collective(&self, slug: &str) {
		self.collectives.remove(slug);
	}
}
