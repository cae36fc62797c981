use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use vesta_cart::{CartLine, CartService};
use vesta_catalog::{CatalogService, Category};
use vesta_checkout::{
    PaymentRecord, PaymentService, ShipmentAddress, ShipmentService, SubmitOutcome,
};
use vesta_core::{session::Session, ClientError, ClientResult};
use vesta_orders::{CreateOrderRequest, OrderDetail, OrderService, OrderSummary};

use crate::config::RemoteConfig;

/// HTTP implementation of every remote-service contract, speaking the
/// storefront's REST surface.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session credential, failing before any I/O when absent.
    fn authorize(
        &self,
        builder: RequestBuilder,
        session: &Session,
    ) -> ClientResult<RequestBuilder> {
        let credential = session.credential()?;
        Ok(builder.header("Authorization", format!("Token {credential}")))
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct DataBody<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct CreateOrderResponse {
    order_id: i64,
}

/// Map a non-success response onto the error taxonomy, surfacing the
/// server's message field verbatim when it has one.
async fn failure(response: Response) -> ClientError {
    let status = response.status();
    let message = match response.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("request failed with status {status}"),
    };
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ClientError::Unauthorized(message)
    } else {
        ClientError::Service(message)
    }
}

/// Decode a `{"message": ...}` confirmation body.
async fn confirmation(response: Response) -> ClientResult<String> {
    if !response.status().is_success() {
        return Err(failure(response).await);
    }
    let body: MessageBody = response
        .json()
        .await
        .map_err(|err| ClientError::malformed(err.to_string()))?;
    Ok(body.message)
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> ClientResult<T> {
    if !response.status().is_success() {
        return Err(failure(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ClientError::malformed(err.to_string()))
}

/// Defensive decode of the order-history envelope: anything that is not a
/// sequence degrades to an empty history, and undecodable rows are skipped
/// rather than failing the whole list.
fn decode_order_list(payload: serde_json::Value) -> Vec<OrderSummary> {
    match payload.get("data").and_then(|data| data.as_array()) {
        Some(rows) => rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(summary) => Some(summary),
                Err(err) => {
                    tracing::warn!("skipping undecodable order row: {err}");
                    None
                }
            })
            .collect(),
        None => {
            tracing::warn!("order list payload was not a sequence; rendering empty history");
            Vec::new()
        }
    }
}

#[async_trait]
impl CartService for RemoteClient {
    async fn list_cart(&self, session: &Session) -> ClientResult<Vec<CartLine>> {
        let request = self.authorize(self.http.get(self.url("/cart/")), session)?;
        let response = request.send().await.map_err(transport)?;
        decode(response).await
    }

    async fn update_quantity(
        &self,
        session: &Session,
        product_id: i64,
        quantity: u32,
    ) -> ClientResult<String> {
        let body = serde_json::json!({
            "product_id": product_id,
            "quantity": quantity,
        });
        let request = self
            .authorize(self.http.post(self.url("/cart/update/")), session)?
            .json(&body);
        let response = request.send().await.map_err(transport)?;
        confirmation(response).await
    }

    async fn delete_line(&self, session: &Session, line_id: i64) -> ClientResult<String> {
        let request = self.authorize(
            self.http.delete(self.url(&format!("/cart/delete/{line_id}/"))),
            session,
        )?;
        let response = request.send().await.map_err(transport)?;
        confirmation(response).await
    }
}

#[async_trait]
impl CatalogService for RemoteClient {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        // The one unauthenticated call: the catalog facet is public.
        let response = self
            .http
            .get(self.url("/category/"))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}

#[async_trait]
impl ShipmentService for RemoteClient {
    async fn fetch_address(&self, session: &Session) -> ClientResult<ShipmentAddress> {
        let request = self.authorize(self.http.get(self.url("/shipment-address/")), session)?;
        let response = request.send().await.map_err(transport)?;
        decode(response).await
    }

    async fn submit_address(
        &self,
        session: &Session,
        address: &ShipmentAddress,
    ) -> ClientResult<SubmitOutcome> {
        let request = self
            .authorize(self.http.post(self.url("/shipment-address/")), session)?
            .json(address);
        let response = request.send().await.map_err(transport)?;

        // The service signals create-or-update via the status code; both
        // are success.
        let created = response.status() == StatusCode::CREATED;
        let message = confirmation(response).await?;
        Ok(if created {
            SubmitOutcome::Created(message)
        } else {
            SubmitOutcome::Updated(message)
        })
    }
}

#[async_trait]
impl PaymentService for RemoteClient {
    async fn record_payment(
        &self,
        session: &Session,
        record: &PaymentRecord,
    ) -> ClientResult<String> {
        let request = self
            .authorize(self.http.post(self.url("/payment/")), session)?
            .json(record);
        let response = request.send().await.map_err(transport)?;
        confirmation(response).await
    }
}

#[async_trait]
impl OrderService for RemoteClient {
    async fn list_orders(&self, session: &Session) -> ClientResult<Vec<OrderSummary>> {
        let request = self.authorize(self.http.get(self.url("/order/")), session)?;
        let response = request.send().await.map_err(transport)?;
        let payload: serde_json::Value = decode(response).await?;
        Ok(decode_order_list(payload))
    }

    async fn order_detail(&self, session: &Session, order_id: i64) -> ClientResult<OrderDetail> {
        let request =
            self.authorize(self.http.get(self.url(&format!("/order/{order_id}/"))), session)?;
        let response = request.send().await.map_err(transport)?;
        let body: DataBody<OrderDetail> = decode(response).await?;
        Ok(body.data)
    }

    async fn create_order(
        &self,
        session: &Session,
        request: &CreateOrderRequest,
    ) -> ClientResult<i64> {
        let request = self
            .authorize(self.http.post(self.url("/order/create/")), session)?
            .json(request);
        let response = request.send().await.map_err(transport)?;
        let body: CreateOrderResponse = decode(response).await?;
        Ok(body.order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_row(order_id: i64) -> serde_json::Value {
        json!({
            "order_id": order_id,
            "product_variation": {
                "id": 3,
                "product_name": "Linen Shirt",
                "color": { "color": "Blue" },
                "size": { "size": "M" },
            },
            "quantity": 1,
            "total_amount": "499.00",
            "order_status": "Processing",
            "order_date": "2024-05-02T10:00:00Z",
            "order_status_date": "2024-05-02T10:00:00Z",
        })
    }

    #[test]
    fn test_non_sequence_order_payload_renders_empty_history() {
        assert!(decode_order_list(json!({ "data": "oops" })).is_empty());
        assert!(decode_order_list(json!({ "detail": "not found" })).is_empty());
        assert!(decode_order_list(json!(null)).is_empty());
    }

    #[test]
    fn test_order_rows_decode_and_bad_rows_are_skipped() {
        let payload = json!({
            "data": [order_row(1), { "order_id": "not-a-number" }, order_row(2)]
        });
        let orders = decode_order_list(payload);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, 1);
        assert_eq!(orders[1].order_id, 2);
    }

    #[test]
    fn test_address_with_missing_fields_decodes_to_empty_strings() {
        // Form inputs stay controlled: absent fields become "", never null.
        let address: ShipmentAddress = serde_json::from_value(json!({})).unwrap();
        assert_eq!(address, ShipmentAddress::default());

        let partial: ShipmentAddress =
            serde_json::from_value(json!({ "name": "", "email": "", "city": "Pune" })).unwrap();
        assert_eq!(partial.name, "");
        assert_eq!(partial.city, "Pune");
        assert_eq!(partial.pincode, "");
    }

    #[test]
    fn test_payment_record_wire_shape() {
        let record = PaymentRecord {
            gateway_payment_id: Some("pay_777".to_string()),
            amount_minor: 99800,
            currency: "INR".to_string(),
            outcome: vesta_checkout::PaymentOutcome::Success,
        };
        let wire = serde_json::to_value(&record).unwrap();
        assert_eq!(wire["gateway_payment_id"], "pay_777");
        assert_eq!(wire["amount_minor"], 99800);
        assert_eq!(wire["outcome"], "Success");
    }
}
