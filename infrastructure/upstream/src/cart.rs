use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::errors::UpstreamError;
use business::domain::wishlist::services::{CartAddition, CartAdditionRequest, CartService};

use crate::client::{UpstreamClient, decode_error, transport_error};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartPayload<'a> {
    user_id: &'a str,
    product_id: &'a str,
    price: f64,
    source: String,
}

#[derive(Deserialize)]
struct AddToCartResponse {
    success: bool,
}

/// Cart adapter: `POST /cart/items` answering `{"success": bool}`.
///
/// A non-2xx answer counts as a refusal rather than a transport failure.
pub struct CartHttp {
    client: UpstreamClient,
}

impl CartHttp {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartService for CartHttp {
    async fn add_to_cart(
        &self,
        request: CartAdditionRequest,
    ) -> Result<CartAddition, UpstreamError> {
        let url = self.client.endpoint(&["cart", "items"])?;
        let payload = AddToCartPayload {
            user_id: request.user_id.as_str(),
            product_id: request.product_id.as_str(),
            price: request.price,
            source: request.source.to_string(),
        };

        let response = self
            .client
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "Cart service refused item");
            return Ok(CartAddition { success: false });
        }

        let body: AddToCartResponse = response.json().await.map_err(decode_error)?;
        Ok(CartAddition {
            success: body.success,
        })
    }
}
