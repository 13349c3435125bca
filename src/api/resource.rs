//! Resource traits for Ontraport endpoints.
//!
//! Every Ontraport object type is served by a singular endpoint (`Rule`)
//! and a plural endpoint (`Rules`). A record type declared with
//! [`api_object!`](crate::api_object) becomes a resource by naming both:
//!
//! ```rust,ignore
//! impl OntraportResource for ApiRule {
//!     const SINGULAR: &'static str = "Rule";
//!     const PLURAL: &'static str = "Rules";
//! }
//! impl DeletableResource for ApiRule {}
//! impl WritableResource for ApiRule {}
//! ```
//!
//! The traits then provide the operations as default methods:
//!
//! | Trait | Method | Request |
//! |---|---|---|
//! | [`OntraportResource`] | `select` | `GET {SINGULAR}?id=` |
//! | | `select_multiple` | `GET {PLURAL}` |
//! | | `get_metadata` | `GET {PLURAL}/meta` |
//! | | `get_collection_info` | `GET {PLURAL}/getInfo` |
//! | [`DeletableResource`] | `delete` | `DELETE {SINGULAR}?id=` |
//! | | `delete_multiple` | `DELETE {PLURAL}` |
//! | [`WritableResource`] | `create` | `POST {PLURAL}` |
//! | | `update` | `PUT {PLURAL}` |

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiError, ApiResponse};
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::converters::LongConverter;
use crate::models::{
    ApiObject, ApiPropertyBase, ApiRecord, ApiSearchOptions, Field, ResponseCollectionInfo,
    ResponseMetadata,
};

/// Key of the identifier field shared by every object type.
const ID: Field<LongConverter> = Field::new("id");

/// A readable Ontraport object type.
#[allow(async_fn_in_trait)]
pub trait OntraportResource: ApiRecord + Serialize + DeserializeOwned + Send + Sync {
    /// The singular endpoint name (e.g., "Rule").
    const SINGULAR: &'static str;

    /// The plural endpoint name (e.g., "Rules").
    const PLURAL: &'static str;

    /// Returns the record's ID, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conversion`] if the raw `id` is not numeric.
    fn record_id(&self) -> Result<Option<i64>, ApiError> {
        Ok(ID.bind(self.data()).value_opt()?)
    }

    /// Fetches one record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the service reports no such record.
    async fn select(client: &HttpClient, id: i64) -> Result<ApiResponse<Self>, ApiError> {
        let id = id.to_string();
        let request = HttpRequest::builder(HttpMethod::Get, Self::SINGULAR)
            .query_param("id", id.clone())
            .build()
            .map_err(|e| ApiError::Http(e.into()))?;

        let response = send(client, request, Self::SINGULAR, Some(&id)).await?;
        let (meta, data) = ApiResponse::split(response);
        if is_empty_data(&data) {
            return Err(ApiError::NotFound {
                resource: Self::SINGULAR,
                id,
            });
        }

        let record = decode_record::<Self>(data)?;
        Ok(meta.map(|()| record))
    }

    /// Fetches the records selected by `options`, or the first page of all
    /// records when `options` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if `data` is not a list of
    /// records.
    async fn select_multiple(
        client: &HttpClient,
        options: Option<&ApiSearchOptions>,
    ) -> Result<ApiResponse<Vec<Self>>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, Self::PLURAL)
            .query(options.map(ApiSearchOptions::to_query).unwrap_or_default())
            .build()
            .map_err(|e| ApiError::Http(e.into()))?;

        let response = send(client, request, Self::PLURAL, None).await?;
        let (meta, data) = ApiResponse::split(response);

        let items = match data {
            Value::Array(items) => items,
            data if is_empty_data(&data) => Vec::new(),
            other => {
                return Err(ApiError::unexpected(
                    Self::PLURAL,
                    format!("expected a list of records, got {other}"),
                ))
            }
        };

        let records = items
            .into_iter()
            .map(decode_record::<Self>)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Selected {} {}", records.len(), Self::PLURAL);
        Ok(meta.map(|()| records))
    }

    /// Fetches the schema of this object type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if the schema cannot be decoded.
    async fn get_metadata(client: &HttpClient) -> Result<ApiResponse<ResponseMetadata>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("{}/meta", Self::PLURAL))
            .build()
            .map_err(|e| ApiError::Http(e.into()))?;

        let response = send(client, request, Self::PLURAL, None).await?;
        ApiResponse::from_http_response(response, Self::PLURAL)
    }

    /// Fetches the field list and record count of the collection selected
    /// by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if the summary cannot be decoded.
    async fn get_collection_info(
        client: &HttpClient,
        options: Option<&ApiSearchOptions>,
    ) -> Result<ApiResponse<ResponseCollectionInfo>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("{}/getInfo", Self::PLURAL))
            .query(options.map(ApiSearchOptions::to_query).unwrap_or_default())
            .build()
            .map_err(|e| ApiError::Http(e.into()))?;

        let response = send(client, request, Self::PLURAL, None).await?;
        ApiResponse::from_http_response(response, Self::PLURAL)
    }
}

/// An object type whose records can be deleted.
#[allow(async_fn_in_trait)]
pub trait DeletableResource: OntraportResource {
    /// Deletes one record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the record does not exist.
    async fn delete(client: &HttpClient, id: i64) -> Result<ApiResponse<()>, ApiError> {
        let id = id.to_string();
        let request = HttpRequest::builder(HttpMethod::Delete, Self::SINGULAR)
            .query_param("id", id.clone())
            .build()
            .map_err(|e| ApiError::Http(e.into()))?;

        let response = send(client, request, Self::SINGULAR, Some(&id)).await?;
        tracing::debug!("Deleted {} {}", Self::SINGULAR, id);
        Ok(ApiResponse::split(response).0)
    }

    /// Deletes every record selected by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingSelection`] if `options` select nothing
    /// explicitly. Deleting every record requires
    /// [`perform_all`](ApiSearchOptions::perform_all).
    async fn delete_multiple(
        client: &HttpClient,
        options: &ApiSearchOptions,
    ) -> Result<ApiResponse<()>, ApiError> {
        if !options.has_selection() {
            return Err(ApiError::MissingSelection {
                resource: Self::PLURAL,
                operation: "delete_multiple",
            });
        }

        let request = HttpRequest::builder(HttpMethod::Delete, Self::PLURAL)
            .query(options.to_query())
            .build()
            .map_err(|e| ApiError::Http(e.into()))?;

        let response = send(client, request, Self::PLURAL, None).await?;
        Ok(ApiResponse::split(response).0)
    }
}

/// An object type whose records can be created and updated.
#[allow(async_fn_in_trait)]
pub trait WritableResource: OntraportResource {
    /// Creates a record from the fields set on `record`.
    ///
    /// Returns the record as stored by the service, including its new ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the service rejects the record.
    async fn create(client: &HttpClient, record: &Self) -> Result<ApiResponse<Self>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, Self::PLURAL)
            .body(body_of(record)?)
            .build()
            .map_err(|e| ApiError::Http(e.into()))?;

        let response = send(client, request, Self::PLURAL, None).await?;
        let (meta, data) = ApiResponse::split(response);
        let created = decode_record::<Self>(data)?;
        tracing::debug!("Created {} {}", Self::SINGULAR, created.data().get("id").unwrap_or("?"));
        Ok(meta.map(|()| created))
    }

    /// Saves the fields set on this record to the service.
    ///
    /// The attributes returned by the service are merged back into the
    /// record and returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] if the record has no ID, and
    /// [`ApiError::UnexpectedResponse`] if the service does not return the
    /// updated attributes. The record is unchanged in both cases.
    async fn update(&mut self, client: &HttpClient) -> Result<ApiResponse<ApiObject>, ApiError> {
        let id = self
            .record_id()?
            .ok_or(ApiError::MissingId { resource: Self::SINGULAR })?
            .to_string();

        let request = HttpRequest::builder(HttpMethod::Put, Self::PLURAL)
            .body(body_of(self)?)
            .build()
            .map_err(|e| ApiError::Http(e.into()))?;

        let response = send(client, request, Self::SINGULAR, Some(&id)).await?;
        let (meta, data) = ApiResponse::split(response);
        let attrs = match data {
            Value::Object(mut map) => map.remove("attrs").ok_or_else(|| {
                ApiError::unexpected(Self::SINGULAR, "update response has no attrs")
            })?,
            other => {
                return Err(ApiError::unexpected(
                    Self::SINGULAR,
                    format!("expected updated attributes, got {other}"),
                ))
            }
        };
        let attrs: ApiObject =
            serde_json::from_value(attrs).map_err(|e| ApiError::unexpected(Self::SINGULAR, e))?;

        self.data_mut().merge(attrs.clone());
        Ok(meta.map(|()| attrs))
    }
}

/// Sends a request and checks the response envelope.
async fn send(
    client: &HttpClient,
    request: HttpRequest,
    resource: &'static str,
    id: Option<&str>,
) -> Result<HttpResponse, ApiError> {
    let response = client
        .request(request)
        .await
        .map_err(|e| ApiError::from_http_error(e, resource, id))?;

    match response.envelope_code() {
        Some(0) | None => Ok(response),
        Some(code) => Err(ApiError::Remote {
            resource,
            code,
            message: envelope_message(&response),
        }),
    }
}

fn envelope_message(response: &HttpResponse) -> String {
    match response.body.get("message").or_else(|| response.body.get("data")) {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn is_empty_data(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn decode_record<R: OntraportResource>(data: Value) -> Result<R, ApiError> {
    if !data.is_object() {
        return Err(ApiError::unexpected(
            R::SINGULAR,
            format!("expected a record object, got {data}"),
        ));
    }
    let record: R = serde_json::from_value(data).map_err(|e| ApiError::unexpected(R::SINGULAR, e))?;

    let unmapped = record.unmapped_keys();
    if !unmapped.is_empty() {
        tracing::debug!("{} fields without accessors: {:?}", R::SINGULAR, unmapped);
    }
    Ok(record)
}

fn body_of<R: OntraportResource>(record: &R) -> Result<Value, ApiError> {
    serde_json::to_value(record).map_err(|e| ApiError::unexpected(R::SINGULAR, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_data_detection() {
        assert!(is_empty_data(&Value::Null));
        assert!(is_empty_data(&json!([])));
        assert!(is_empty_data(&json!({})));
        assert!(is_empty_data(&json!("")));
        assert!(!is_empty_data(&json!({"id": "1"})));
        assert!(!is_empty_data(&json!(0)));
    }

    #[test]
    fn test_envelope_message_prefers_message_field() {
        let response = HttpResponse::new(
            200,
            std::collections::HashMap::new(),
            json!({"code": 1, "message": "bad", "data": "ignored"}),
        );
        assert_eq!(envelope_message(&response), "bad");

        let response = HttpResponse::new(
            200,
            std::collections::HashMap::new(),
            json!({"code": 1, "data": "Invalid condition"}),
        );
        assert_eq!(envelope_message(&response), "Invalid condition");
    }
}
