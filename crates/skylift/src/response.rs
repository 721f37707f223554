//! Response classification and JSON body decoding.
//!
//! Every resource operation funnels its `reqwest::Response` through this
//! module: [`check_resp`] decides success vs. failure and builds the error
//! value for failures, [`unmarshal_json`] decodes a success body into the
//! caller's type. Classification itself is a pure function over the status
//! code, the Content-Type gate result, and the buffered body bytes, so it
//! is safe to run concurrently and yields the same error for the same
//! inputs.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, Error, HttpError, ResponseError};

/// Wire shape of a structured error body returned by the API.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ApiErrorBody {
    error_key: String,
    field: String,
    message: String,
}

impl ApiErrorBody {
    fn is_empty(&self) -> bool {
        self.error_key.is_empty() && self.field.is_empty() && self.message.is_empty()
    }
}

/// Checks that the Content-Type header denotes a JSON body.
///
/// The header value is parsed as a media type; the match succeeds iff the
/// base type equals `application/json`, ignoring parameters like charset.
fn json_content_type(headers: &HeaderMap) -> Result<(), ResponseError> {
    let value = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if value.is_empty() {
        return Err(ResponseError::ContentTypeMissing);
    }

    match value.parse::<mime::Mime>() {
        Ok(mt) if mt.type_() == mime::APPLICATION && mt.subtype() == mime::JSON => Ok(()),
        Ok(mt) => Err(ResponseError::UnexpectedContentType(
            mt.essence_str().to_owned(),
        )),
        Err(_) => Err(ResponseError::UnexpectedContentType(value.to_owned())),
    }
}

/// Converts an already-buffered non-success response into an error value.
///
/// An empty body short-circuits before the Content-Type gate: the server
/// sent a bare failure status and there is nothing to report beyond it. A
/// structured error body with every field empty is likewise downgraded to
/// an [`HttpError`] with no sub-errors rather than an [`ApiError`] with
/// invented content.
fn classify_failure(
    request_url: &str,
    status_code: u16,
    content_type: Result<(), ResponseError>,
    body: &[u8],
) -> Error {
    let http_error = |errors: Vec<ResponseError>| HttpError {
        request_url: request_url.to_owned(),
        status_code,
        resp_body: body.to_vec(),
        errors,
    };

    if body.is_empty() {
        return http_error(Vec::new()).into();
    }

    if let Err(err) = content_type {
        return http_error(vec![err]).into();
    }

    match serde_json::from_slice::<ApiErrorBody>(body) {
        Err(err) => http_error(vec![ResponseError::Decode(err)]).into(),
        Ok(decoded) if decoded.is_empty() => http_error(Vec::new()).into(),
        Ok(decoded) => ApiError {
            error_key: decoded.error_key,
            field: decoded.field,
            message: decoded.message,
            request_url: request_url.to_owned(),
            status_code,
            resp_body: body.to_vec(),
        }
        .into(),
    }
}

/// Classifies a completed request/response pair.
///
/// Success (2xx) responses pass through untouched so the caller can decode
/// the body; anything else is converted into [`Error::Api`] when the body
/// carries a structured server error with at least one populated field, or
/// [`Error::Http`] otherwise. The body is buffered exactly once before any
/// branch that inspects it.
pub(crate) async fn check_resp(request_url: &str, resp: Response) -> Result<Response, Error> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status_code = resp.status().as_u16();
    let content_type = json_content_type(resp.headers());
    let body = resp.bytes().await?;

    Err(classify_failure(request_url, status_code, content_type, &body))
}

/// Decodes a JSON response body into `T`.
///
/// Invoked after [`check_resp`] has confirmed success, but still validates
/// the Content-Type: a 2xx response with a mistyped or malformed body is a
/// failure the caller must be able to attribute. On any failure the full
/// raw body is attached to the returned [`HttpError`].
pub(crate) async fn unmarshal_json<T: DeserializeOwned>(
    resp: Response,
    request_url: &str,
) -> Result<T, Error> {
    let status_code = resp.status().as_u16();
    let content_type = json_content_type(resp.headers());
    let body = resp.bytes().await?;

    let http_error = |errors: Vec<ResponseError>| HttpError {
        request_url: request_url.to_owned(),
        status_code,
        resp_body: body.to_vec(),
        errors,
    };

    if let Err(err) = content_type {
        return Err(http_error(vec![err]).into());
    }

    serde_json::from_slice(&body).map_err(|err| http_error(vec![ResponseError::Decode(err)]).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pullzone::Hostname;

    const URL: &str = "http://test.de";

    fn response(status: u16, content_type: Option<&str>, body: &[u8]) -> Response {
        let mut builder = http::Response::builder().status(status);
        if let Some(ct) = content_type {
            builder = builder.header("Content-Type", ct);
        }
        builder.body(body.to_vec()).unwrap().into()
    }

    fn expect_http_error(err: Error) -> HttpError {
        match err {
            Error::Http(err) => err,
            other => panic!("expected Error::Http, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through_without_body_inspection() {
        let resp = response(200, None, b"not json at all");
        let resp = check_resp(URL, resp).await.expect("2xx must classify as success");
        assert_eq!(resp.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn empty_unsuccessful_response_has_no_sub_errors() {
        let resp = response(400, None, b"");

        let err = check_resp(URL, resp).await.unwrap_err();
        let http_err = expect_http_error(err);

        assert_eq!(http_err.request_url, URL);
        assert_eq!(http_err.status_code, 400);
        assert!(http_err.errors.is_empty());
        assert!(http_err.resp_body.is_empty());
    }

    #[tokio::test]
    async fn structured_error_body_yields_api_error() {
        let body = br#"{"ErrorKey":"err","Field":"id","Message":"something br0ke"}"#;
        let resp = response(400, Some("application/json; charset=utf-8"), body);

        let err = check_resp(URL, resp).await.unwrap_err();
        let api_err = match err {
            Error::Api(err) => err,
            other => panic!("expected Error::Api, got: {other:?}"),
        };

        assert_eq!(api_err.error_key, "err");
        assert_eq!(api_err.field, "id");
        assert_eq!(api_err.message, "something br0ke");
        assert_eq!(api_err.request_url, URL);
        assert_eq!(api_err.status_code, 400);
        assert_eq!(api_err.resp_body, body);
    }

    #[tokio::test]
    async fn missing_content_type_with_body_yields_one_sub_error() {
        let body = br#"{"Message":"something br0ke"}"#;
        let resp = response(400, None, body);

        let http_err = expect_http_error(check_resp(URL, resp).await.unwrap_err());

        assert_eq!(http_err.resp_body, body);
        assert_eq!(http_err.errors.len(), 1);
        assert_eq!(
            http_err.errors[0].to_string(),
            "processing response failed: Content-Type header is missing or empty"
        );
    }

    #[tokio::test]
    async fn wrong_content_type_names_the_media_type() {
        let resp = response(400, Some("application/binary"), b"junk");

        let http_err = expect_http_error(check_resp(URL, resp).await.unwrap_err());

        assert_eq!(http_err.resp_body, b"junk");
        assert_eq!(http_err.errors.len(), 1);
        assert_eq!(
            http_err.errors[0].to_string(),
            "processing response failed: expected Content-Type to be \"application/json\", \
             got: \"application/binary\""
        );
    }

    #[tokio::test]
    async fn content_type_parameters_are_ignored() {
        let resp = response(200, Some("Application/JSON; charset=utf-8"), b"{\"Value\":\"x\"}");

        let decoded: Hostname = unmarshal_json(resp, URL).await.unwrap();
        assert_eq!(decoded.value.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn all_empty_error_body_downgrades_to_http_error() {
        let resp = response(400, Some("application/json"), b"{}");

        let http_err = expect_http_error(check_resp(URL, resp).await.unwrap_err());

        assert!(http_err.errors.is_empty());
        assert_eq!(http_err.resp_body, b"{}");
    }

    #[tokio::test]
    async fn malformed_error_body_yields_decode_sub_error() {
        let body = b"{not json";
        let resp = response(400, Some("application/json"), body);

        let http_err = expect_http_error(check_resp(URL, resp).await.unwrap_err());

        assert_eq!(http_err.resp_body, body);
        assert_eq!(http_err.errors.len(), 1);
        assert!(matches!(http_err.errors[0], ResponseError::Decode(_)));
    }

    #[tokio::test]
    async fn unmarshal_round_trips_a_value() {
        let hostname = Hostname {
            value: Some("hello".into()),
            ..Default::default()
        };
        let body = serde_json::to_vec(&hostname).unwrap();
        let resp = response(200, Some("application/json; charset=utf-8"), &body);

        let decoded: Hostname = unmarshal_json(resp, "").await.unwrap();
        assert_eq!(decoded.value, hostname.value);
    }

    #[tokio::test]
    async fn unmarshal_missing_content_type_attaches_body_and_context() {
        let body = serde_json::to_vec(&Hostname::default()).unwrap();
        let resp = response(200, None, &body);

        let err = unmarshal_json::<Hostname>(resp, URL).await.unwrap_err();
        let http_err = expect_http_error(err);

        assert_eq!(http_err.request_url, URL);
        assert_eq!(http_err.status_code, 200);
        assert_eq!(http_err.errors.len(), 1);
        assert_eq!(
            http_err.errors[0].to_string(),
            "processing response failed: Content-Type header is missing or empty"
        );
        assert_eq!(http_err.resp_body, body);
    }

    #[tokio::test]
    async fn unmarshal_wrong_content_type_attaches_body_and_context() {
        let body = serde_json::to_vec(&Hostname::default()).unwrap();
        let resp = response(200, Some("application/binary"), &body);

        let err = unmarshal_json::<Hostname>(resp, URL).await.unwrap_err();
        let http_err = expect_http_error(err);

        assert_eq!(http_err.request_url, URL);
        assert_eq!(http_err.status_code, 200);
        assert_eq!(http_err.resp_body, body);
        assert_eq!(http_err.errors.len(), 1);
        assert_eq!(
            http_err.errors[0].to_string(),
            "processing response failed: expected Content-Type to be \"application/json\", \
             got: \"application/binary\""
        );
    }

    #[test]
    fn classification_is_idempotent_over_buffered_bytes() {
        let body: &[u8] = br#"{"ErrorKey":"err","Field":"id","Message":"something br0ke"}"#;
        let headers = HeaderMap::new();

        let first = classify_failure(URL, 400, json_content_type(&headers), body);
        let second = classify_failure(URL, 400, json_content_type(&headers), body);

        assert_eq!(first.to_string(), second.to_string());
        match (first, second) {
            (Error::Http(a), Error::Http(b)) => {
                assert_eq!(a.resp_body, b.resp_body);
                assert_eq!(a.errors.len(), b.errors.len());
            }
            (a, b) => panic!("expected matching Error::Http values, got: {a:?} / {b:?}"),
        }
    }
}
