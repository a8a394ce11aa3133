use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use business::domain::errors::UpstreamError;
use business::domain::wishlist::services::{CatalogProduct, ProductCatalogService, StockCheck};
use business::domain::wishlist::value_objects::ProductId;

use crate::client::{UpstreamClient, decode_error, transport_error};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductPayload {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default, alias = "imageUrl")]
    image: String,
    #[serde(default)]
    stock: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StockPayload {
    in_stock: bool,
}

/// Product catalog adapter speaking JSON over HTTP.
///
/// - `GET /products/{id}`: product details, 404 when unknown
/// - `POST /products/{id}/stock-check` with `{"quantity": n}`: `{"inStock": bool}`
pub struct ProductCatalogHttp {
    client: UpstreamClient,
}

impl ProductCatalogHttp {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    fn into_product(payload: ProductPayload) -> Result<CatalogProduct, UpstreamError> {
        if !payload.price.is_finite() || payload.price < 0.0 {
            tracing::warn!(product_id = %payload.id, price = payload.price, "Catalog returned an invalid price");
            return Err(UpstreamError::InvalidResponse);
        }

        Ok(CatalogProduct {
            id: payload.id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image: payload.image,
            stock: payload.stock,
        })
    }
}

#[async_trait]
impl ProductCatalogService for ProductCatalogHttp {
    async fn get_product(
        &self,
        product_id: &ProductId,
    ) -> Result<Option<CatalogProduct>, UpstreamError> {
        let url = self.client.endpoint(&["products", product_id.as_str()])?;

        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let payload: ProductPayload = response.json().await.map_err(decode_error)?;
                Self::into_product(payload).map(Some)
            }
            status => Err(UpstreamError::UnexpectedStatus(status.as_u16())),
        }
    }

    async fn check_stock(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<StockCheck, UpstreamError> {
        let url = self
            .client
            .endpoint(&["products", product_id.as_str(), "stock-check"])?;

        let response = self
            .client
            .client
            .post(url)
            .json(&json!({ "quantity": quantity }))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(UpstreamError::UnexpectedStatus(response.status().as_u16()));
        }

        let payload: StockPayload = response.json().await.map_err(decode_error)?;
        Ok(StockCheck {
            in_stock: payload.in_stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn catalog(server: &MockServer) -> ProductCatalogHttp {
        ProductCatalogHttp::new(UpstreamClient::new(
            server.base_url(),
            Duration::from_secs(5),
        ))
    }

    fn p1() -> ProductId {
        ProductId::parse("p1").unwrap()
    }

    #[tokio::test]
    async fn should_decode_product_details() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products/p1");
                then.status(200).json_body(serde_json::json!({
                    "id": "p1",
                    "name": "Shoe",
                    "description": "Comfortable running shoes",
                    "price": 100,
                    "image": "https://example.com/shoe.jpg",
                    "stock": 5
                }));
            })
            .await;

        let product = catalog(&server).get_product(&p1()).await.unwrap().unwrap();

        mock.assert_async().await;
        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Shoe");
        assert_eq!(product.price, 100.0);
        assert_eq!(product.stock, 5);
    }

    #[tokio::test]
    async fn should_accept_image_url_alias_and_missing_optional_fields() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/p1");
                then.status(200).json_body(serde_json::json!({
                    "id": "p1",
                    "name": "Shoe",
                    "price": 100,
                    "imageUrl": "https://example.com/shoe.jpg"
                }));
            })
            .await;

        let product = catalog(&server).get_product(&p1()).await.unwrap().unwrap();

        assert_eq!(product.image, "https://example.com/shoe.jpg");
        assert_eq!(product.description, "");
        assert_eq!(product.stock, 0);
    }

    #[tokio::test]
    async fn should_return_none_when_catalog_answers_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/p1");
                then.status(404);
            })
            .await;

        let product = catalog(&server).get_product(&p1()).await.unwrap();

        assert!(product.is_none());
    }

    #[tokio::test]
    async fn should_fail_on_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/p1");
                then.status(500);
            })
            .await;

        let result = catalog(&server).get_product(&p1()).await;

        assert!(matches!(
            result.unwrap_err(),
            UpstreamError::UnexpectedStatus(500)
        ));
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/p1");
                then.status(200).json_body(serde_json::json!({
                    "id": "p1",
                    "name": "Shoe",
                    "price": -1,
                    "stock": 5
                }));
            })
            .await;

        let result = catalog(&server).get_product(&p1()).await;

        assert!(matches!(result.unwrap_err(), UpstreamError::InvalidResponse));
    }

    #[tokio::test]
    async fn should_send_quantity_for_stock_check() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/products/p1/stock-check")
                    .json_body(serde_json::json!({ "quantity": 1 }));
                then.status(200)
                    .json_body(serde_json::json!({ "inStock": true }));
            })
            .await;

        let check = catalog(&server).check_stock(&p1(), 1).await.unwrap();

        mock.assert_async().await;
        assert!(check.in_stock);
    }

    #[tokio::test]
    async fn should_report_transport_failure_when_unreachable() {
        let catalog = ProductCatalogHttp::new(UpstreamClient::new(
            "http://127.0.0.1:1",
            Duration::from_secs(1),
        ));

        let result = catalog.get_product(&p1()).await;

        assert!(matches!(result.unwrap_err(), UpstreamError::Transport));
    }
}
