//! Client for the local shop backend (products and the chatbot).
//!
//! The base URL is baked in at compile time from `SHOP_API_URL`, matching
//! how the backend is addressed in development.

use gloo_net::http::Request;

use common::model::product::Product;
use common::requests::{ChatRequest, ChatResponse, ProductPayload};

use super::{check_status, read_json, RequestError};

const SHOP_URL: &str = match option_env!("SHOP_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// `GET /products`: the full collection, unpaginated.
pub async fn list_products() -> Result<Vec<Product>, RequestError> {
    const OP: &str = "list products";
    let response = Request::get(&format!("{SHOP_URL}/products"))
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)?;
    read_json(OP, response).await
}

/// `POST /products`: creates a product, returning the stored record with
/// its server-assigned id.
pub async fn add_product(payload: &ProductPayload) -> Result<Product, RequestError> {
    const OP: &str = "add product";
    let response = Request::post(&format!("{SHOP_URL}/products"))
        .json(payload)
        .map_err(|err| RequestError::decode(OP, err))?
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)?;
    read_json(OP, response).await
}

/// `PUT /products/{id}`: replaces the mutable attributes of a product.
pub async fn update_product(id: u64, payload: &ProductPayload) -> Result<Product, RequestError> {
    const OP: &str = "update product";
    let response = Request::put(&format!("{SHOP_URL}/products/{id}"))
        .json(payload)
        .map_err(|err| RequestError::decode(OP, err))?
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)?;
    read_json(OP, response).await
}

/// `DELETE /products/{id}`.
pub async fn delete_product(id: u64) -> Result<(), RequestError> {
    const OP: &str = "delete product";
    let response = Request::delete(&format!("{SHOP_URL}/products/{id}"))
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)
}

/// `POST /products/{id}/favorite`: flips the favorite flag. The new value
/// is only observable through the next list load.
pub async fn favorite_product(id: u64) -> Result<(), RequestError> {
    const OP: &str = "favorite product";
    let response = Request::post(&format!("{SHOP_URL}/products/{id}/favorite"))
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)
}

/// `POST /chatbot`: one question, one reply.
pub async fn chatbot_ask(message: String) -> Result<ChatResponse, RequestError> {
    const OP: &str = "chatbot";
    let response = Request::post(&format!("{SHOP_URL}/chatbot"))
        .json(&ChatRequest { message })
        .map_err(|err| RequestError::decode(OP, err))?
        .send()
        .await
        .map_err(|err| RequestError::network(OP, err))?;
    check_status(OP, &response)?;
    read_json(OP, response).await
}
