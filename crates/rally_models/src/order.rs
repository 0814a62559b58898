use rally_util::query;
use serde::Deserialize;

use crate::{
	collective::{ ContributorCollective, HostModel },
	tier::Interval,
	Result
};

/// The slice of an order a tier card needs: just enough to know who it
/// came from.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
	#[serde(default)]
	pub from_collective: Option<ContributorCollective>
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderModel {
	pub id: i64,
	#[serde(default)]
	pub interval: Option<Interval>,
	#[serde(default)]
	pub public_message: Option<String>,
	#[serde(default)]
	pub quantity: Option<i64>,
	#[serde(default)]
	pub total_amount: Option<i64>,
	pub collective: OrderCollective,
	#[serde(default)]
	pub from_collective: Option<ContributorCollective>
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCollective {
	pub id: i64,
	pub slug: String,
	pub name: String,
	pub currency: String,
	#[serde(default)]
	pub website: Option<String>,
	#[serde(default)]
	pub host: Option<HostModel>,
	#[serde(default)]
	pub payment_methods: Vec<PaymentMethodModel>
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodModel {
	pub id: i64,
	#[serde(default)]
	pub name: Option<String>,
	pub service: String
}

const GET_ORDER: &str = "
	query getOrder($id: Int!) {
		Order(id: $id) {
			id
			interval
			publicMessage
			quantity
			totalAmount
			collective {
				id
				slug
				name
				currency
				website
				host {
					id
					name
					slug
				}
				paymentMethods {
					id
					name
					service
				}
			}
			fromCollective {
				id
				slug
				name
				type
				image
				website
			}
		}
	}
";

#[derive(Deserialize)]
struct GetOrder {
	#[serde(rename = "Order")]
	order: OrderModel
}

impl OrderModel {
	pub async fn get(id: i64) -> Result<Self> {
		let response: GetOrder = query(
			GET_ORDER,
			serde_json::json!({ "id": id }),
			None
		).await?;
		Ok(response.order)
	}
}

#[cfg(test)]
mod tests {
	use super::OrderModel;

	#[test]
	fn deserialises_the_query_shape() {
		let order: OrderModel = serde_json::from_value(serde_json::json!({
			"id": 821,
			"interval": "month",
			"publicMessage": "keep it up!",
			"quantity": 1,
			"totalAmount": null,
			"collective": {
				"id": 4,
				"slug": "webpack",
				"name": "webpack",
				"currency": "USD",
				"host": { "id": 9, "name": "Open Source Host" },
				"paymentMethods": [
					{ "id": 2, "name": "visa", "service": "stripe" }
				]
			},
			"fromCollective": {
				"id": 31,
				"slug": "jan",
				"name": "Jan",
				"type": "USER"
			}
		})).unwrap();

		assert_eq!(order.total_amount, None);
		assert_eq!(order.collective.payment_methods.len(), 1);
		assert!(order.collective.host.is_some());
	}
}
