use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::wishlist::use_cases::add_item::{
    AddWishlistItemParams, AddWishlistItemUseCase,
};
use business::domain::wishlist::use_cases::clear::{ClearWishlistParams, ClearWishlistUseCase};
use business::domain::wishlist::use_cases::get::{GetWishlistParams, GetWishlistUseCase};
use business::domain::wishlist::use_cases::move_to_cart::{
    MoveWishlistItemToCartParams, MoveWishlistItemToCartUseCase,
};
use business::domain::wishlist::use_cases::remove_item::{
    RemoveWishlistItemParams, RemoveWishlistItemUseCase,
};
use business::domain::wishlist::value_objects::parse_user_id;

use super::messages;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{
    ClearWishlistEnvelope, ClearWishlistRequest, MoveToCartEnvelope, WishlistEnvelope,
    WishlistItemRequest,
};

pub struct WishlistApi {
    get_use_case: Arc<dyn GetWishlistUseCase>,
    add_item_use_case: Arc<dyn AddWishlistItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveWishlistItemUseCase>,
    move_to_cart_use_case: Arc<dyn MoveWishlistItemToCartUseCase>,
    clear_use_case: Arc<dyn ClearWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        get_use_case: Arc<dyn GetWishlistUseCase>,
        add_item_use_case: Arc<dyn AddWishlistItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveWishlistItemUseCase>,
        move_to_cart_use_case: Arc<dyn MoveWishlistItemToCartUseCase>,
        clear_use_case: Arc<dyn ClearWishlistUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            remove_item_use_case,
            move_to_cart_use_case,
            clear_use_case,
        }
    }
}

/// Wishlist management API
///
/// Endpoints for saving products for later and moving them into the cart.
#[OpenApi]
impl WishlistApi {
    /// Get a user's wishlist
    ///
    /// Returns the wishlist, creating an empty one on first access.
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_wishlist(
        &self,
        #[oai(name = "userId")] user_id: Query<String>,
    ) -> GetWishlistResponse {
        let user_id = match parse_user_id(user_id.0) {
            Ok(user_id) => user_id,
            Err(err) => return GetWishlistResponse::BadRequest(err.into_error_response().1),
        };

        match self
            .get_use_case
            .execute(GetWishlistParams { user_id })
            .await
        {
            Ok(wishlist) => GetWishlistResponse::Ok(Json(WishlistEnvelope::ok(
                messages::WISHLIST_RETRIEVED,
                wishlist,
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetWishlistResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the wishlist
    ///
    /// Looks the product up in the catalog and saves a snapshot of it.
    /// Out-of-stock and already saved products are rejected.
    #[oai(path = "/wishlist/add", method = "post", tag = "ApiTags::Wishlist")]
    async fn add_item(&self, body: Json<WishlistItemRequest>) -> AddWishlistItemResponse {
        let (user_id, product_id) = match body.0.into_ids() {
            Ok(ids) => ids,
            Err(err) => return AddWishlistItemResponse::BadRequest(err.into_error_response().1),
        };

        match self
            .add_item_use_case
            .execute(AddWishlistItemParams {
                user_id,
                product_id,
            })
            .await
        {
            Ok(wishlist) => AddWishlistItemResponse::Ok(Json(WishlistEnvelope::ok(
                messages::ITEM_ADDED_TO_WISHLIST,
                wishlist,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddWishlistItemResponse::BadRequest(json),
                    404 => AddWishlistItemResponse::NotFound(json),
                    _ => AddWishlistItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the wishlist
    #[oai(path = "/wishlist/remove", method = "delete", tag = "ApiTags::Wishlist")]
    async fn remove_item(&self, body: Json<WishlistItemRequest>) -> RemoveWishlistItemResponse {
        let (user_id, product_id) = match body.0.into_ids() {
            Ok(ids) => ids,
            Err(err) => {
                return RemoveWishlistItemResponse::BadRequest(err.into_error_response().1);
            }
        };

        match self
            .remove_item_use_case
            .execute(RemoveWishlistItemParams {
                user_id,
                product_id,
            })
            .await
        {
            Ok(wishlist) => RemoveWishlistItemResponse::Ok(Json(WishlistEnvelope::ok(
                messages::ITEM_REMOVED_FROM_WISHLIST,
                wishlist,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveWishlistItemResponse::NotFound(json),
                    _ => RemoveWishlistItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete the whole wishlist
    ///
    /// Fails with 404 when the user has no wishlist. The next read recreates an empty one.
    #[oai(path = "/wishlist/clear", method = "delete", tag = "ApiTags::Wishlist")]
    async fn clear(&self, body: Json<ClearWishlistRequest>) -> ClearWishlistResponse {
        let user_id = match parse_user_id(body.0.user_id) {
            Ok(user_id) => user_id,
            Err(err) => return ClearWishlistResponse::BadRequest(err.into_error_response().1),
        };

        match self
            .clear_use_case
            .execute(ClearWishlistParams { user_id })
            .await
        {
            Ok(deleted) => ClearWishlistResponse::Ok(Json(ClearWishlistEnvelope::ok(
                messages::WISHLIST_CLEARED,
                deleted,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ClearWishlistResponse::NotFound(json),
                    _ => ClearWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Move a saved product into the cart
    ///
    /// Checks stock, adds the item to the cart at its saved price, then removes it
    /// from the wishlist.
    #[oai(path = "/wishlist/move-to-cart", method = "post", tag = "ApiTags::Wishlist")]
    async fn move_to_cart(&self, body: Json<WishlistItemRequest>) -> MoveToCartResponse {
        let (user_id, product_id) = match body.0.into_ids() {
            Ok(ids) => ids,
            Err(err) => return MoveToCartResponse::BadRequest(err.into_error_response().1),
        };

        match self
            .move_to_cart_use_case
            .execute(MoveWishlistItemToCartParams {
                user_id,
                product_id,
            })
            .await
        {
            Ok(outcome) => MoveToCartResponse::Ok(Json(MoveToCartEnvelope::ok(
                messages::ITEM_MOVED_TO_CART,
                outcome,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => MoveToCartResponse::BadRequest(json),
                    404 => MoveToCartResponse::NotFound(json),
                    503 => MoveToCartResponse::ServiceUnavailable(json),
                    _ => MoveToCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddWishlistItemResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveWishlistItemResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<ClearWishlistEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MoveToCartResponse {
    #[oai(status = 200)]
    Ok(Json<MoveToCartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
