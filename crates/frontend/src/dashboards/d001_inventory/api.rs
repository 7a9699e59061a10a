use crate::shared::api_utils::api_url;
use contracts::dashboards::d001_inventory_summary::SummarySnapshot;
use contracts::domain::a001_product::{ProductView, StockStatus};
use contracts::shared::mutation::MutationResponse;
use gloo_net::http::Request;
use serde::Serialize;

/// Server actions that change inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationAction {
    AddProduct,
    Buy,
    Sell,
}

impl MutationAction {
    pub fn path(&self) -> &'static str {
        match self {
            MutationAction::AddProduct => "/add_product",
            MutationAction::Buy => "/buy",
            MutationAction::Sell => "/sell",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MutationAction::AddProduct => "add product",
            MutationAction::Buy => "buy",
            MutationAction::Sell => "sell",
        }
    }
}

/// Stock figures reported after a buy or sell
#[derive(Debug, Clone, PartialEq)]
pub struct StockChange {
    pub product_id: i64,
    pub new_stock: i64,
    pub status: Option<StockStatus>,
}

/// Accepted mutation, in the order the synchronizer applies it
#[derive(Debug, Clone, PartialEq)]
pub struct MutationPayload {
    pub message: String,
    pub product: Option<ProductView>,
    pub summary: Option<SummarySnapshot>,
    pub stock_change: Option<StockChange>,
}

impl From<MutationResponse> for MutationPayload {
    fn from(resp: MutationResponse) -> Self {
        let stock_change = match (resp.product_id, resp.new_stock) {
            (Some(product_id), Some(new_stock)) => Some(StockChange {
                product_id,
                new_stock,
                status: resp.status,
            }),
            _ => None,
        };
        Self {
            message: resp.message,
            product: resp.product,
            summary: resp.summary,
            stock_change,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("failed to encode form: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Accepted(MutationPayload),
    /// Well-formed response with `success = false`; the message is shown verbatim
    Rejected(String),
    TransportError(TransportError),
}

/// Classifies a response body by its `success` flag. The HTTP status is not consulted.
pub fn classify(body: &str) -> MutationOutcome {
    match serde_json::from_str::<MutationResponse>(body) {
        Ok(resp) if resp.success => MutationOutcome::Accepted(resp.into()),
        Ok(resp) => MutationOutcome::Rejected(resp.message),
        Err(e) => MutationOutcome::TransportError(TransportError::Decode(e.to_string())),
    }
}

pub fn encode_form<T: Serialize>(fields: &T) -> Result<String, TransportError> {
    serde_qs::to_string(fields).map_err(|e| TransportError::Encode(e.to_string()))
}

async fn post_form(url: &str, body: String) -> Result<String, TransportError> {
    let response = Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(body)
        .map_err(|e| TransportError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    if !response.ok() {
        log::debug!("{} answered HTTP {}", url, response.status());
    }

    response
        .text()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}

/// Sends one mutation and waits for its outcome. Touches no view state.
pub async fn dispatch<T: Serialize>(
    api_base: &str,
    action: MutationAction,
    fields: &T,
) -> MutationOutcome {
    let body = match encode_form(fields) {
        Ok(body) => body,
        Err(e) => return MutationOutcome::TransportError(e),
    };
    let url = api_url(api_base, action.path());
    log::debug!("dispatching {} to {}", action.label(), url);

    match post_form(&url, body).await {
        Ok(text) => classify(&text),
        Err(e) => MutationOutcome::TransportError(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::StockMoveRequest;
    use serde_json::json;

    #[test]
    fn test_classify_by_success_flag() {
        let body = json!({"success": false, "message": "Product does not exist."}).to_string();
        assert_eq!(
            classify(&body),
            MutationOutcome::Rejected("Product does not exist.".to_string())
        );
    }

    #[test]
    fn test_classify_malformed_is_transport_error() {
        let outcome = classify("<html>502 Bad Gateway</html>");
        assert!(matches!(
            outcome,
            MutationOutcome::TransportError(TransportError::Decode(_))
        ));
    }

    #[test]
    fn test_classify_stock_change() {
        let body = json!({
            "success": true,
            "message": "Success",
            "product_id": 7,
            "new_stock": 15,
            "status": "Ok",
            "summary": {"total_items": 1, "total_value": 142.5, "low_stock_count": 0}
        })
        .to_string();
        let MutationOutcome::Accepted(payload) = classify(&body) else {
            panic!("expected accepted outcome");
        };
        assert_eq!(
            payload.stock_change,
            Some(StockChange {
                product_id: 7,
                new_stock: 15,
                status: Some(StockStatus::Ok)
            })
        );
        assert!(payload.product.is_none());
    }

    #[test]
    fn test_partial_stock_fields_are_not_a_stock_change() {
        let body = json!({"success": true, "message": "Success", "product_id": 7}).to_string();
        let MutationOutcome::Accepted(payload) = classify(&body) else {
            panic!("expected accepted outcome");
        };
        assert!(payload.stock_change.is_none());
    }

    #[test]
    fn test_encode_form_fields() {
        let fields = StockMoveRequest {
            product_id: "7".to_string(),
            quantity: "12".to_string(),
        };
        assert_eq!(encode_form(&fields).unwrap(), "product_id=7&quantity=12");
    }
}
