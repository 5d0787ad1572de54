//! Content negotiation between the JSON and XML representations
//!
//! The client's `Accept` header is matched against the media types each
//! representation can produce. Every representation is scored with the
//! quality of the most specific range that matches it; the best non-zero
//! score wins and JSON wins ties. A request without `Accept` gets JSON.

use axum::{
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::error::{ApiError, ApiResult};

/// Response body encodings offered by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    Xml,
}

/// One entry of an `Accept` header
#[derive(Debug, Clone, PartialEq)]
struct MediaRange {
    kind: String,
    subtype: String,
    quality: f32,
}

impl Representation {
    const PREFERENCE: [Representation; 2] = [Representation::Json, Representation::Xml];

    /// Media types this representation can be served as
    fn media_types(self) -> &'static [&'static str] {
        match self {
            Representation::Json => &["application/json", "text/json"],
            Representation::Xml => &["application/xml", "text/xml"],
        }
    }

    /// `Content-Type` of responses in this representation
    pub fn content_type(self) -> &'static str {
        match self {
            Representation::Json => "application/json; charset=utf-8",
            Representation::Xml => "application/xml; charset=utf-8",
        }
    }

    /// Pick the representation for a request, or refuse with 406
    pub fn negotiate(headers: &HeaderMap) -> ApiResult<Self> {
        let ranges: Vec<MediaRange> = headers
            .get_all(header::ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(parse_accept)
            .collect();

        if ranges.is_empty() {
            return Ok(Representation::Json);
        }

        let mut best: Option<(Representation, f32)> = None;
        for candidate in Self::PREFERENCE {
            let quality = candidate
                .media_types()
                .iter()
                .filter_map(|media_type| quality_of(&ranges, media_type))
                .fold(0.0_f32, f32::max);

            let improves = match best {
                Some((_, current)) => quality > current,
                None => true,
            };
            if quality > 0.0 && improves {
                best = Some((candidate, quality));
            }
        }

        best.map(|(representation, _)| representation)
            .ok_or(ApiError::NotAcceptable)
    }

    /// Encode `value`, using `xml_root` as the XML root element
    pub fn render<T: Serialize>(
        self,
        status: StatusCode,
        xml_root: &str,
        value: &T,
    ) -> ApiResult<Response> {
        let body = match self {
            Representation::Json => serde_json::to_string(value).map_err(|e| {
                error!("Failed to encode JSON body: {}", e);
                ApiError::InternalServerError
            })?,
            Representation::Xml => to_xml(xml_root, value)?,
        };

        Ok(self.respond(status, body))
    }

    /// Encode a sequence: a JSON array, or an XML `list_root` element with
    /// one `item_root` child per item
    pub fn render_list<T: Serialize>(
        self,
        status: StatusCode,
        list_root: &str,
        item_root: &str,
        items: &[T],
    ) -> ApiResult<Response> {
        let body = match self {
            Representation::Json => serde_json::to_string(items).map_err(|e| {
                error!("Failed to encode JSON body: {}", e);
                ApiError::InternalServerError
            })?,
            Representation::Xml => {
                let children = items
                    .iter()
                    .map(|item| to_xml(item_root, item))
                    .collect::<ApiResult<String>>()?;
                format!("<{list_root}>{children}</{list_root}>")
            }
        };

        Ok(self.respond(status, body))
    }

    fn respond(self, status: StatusCode, body: String) -> Response {
        (status, [(header::CONTENT_TYPE, self.content_type())], body).into_response()
    }
}

fn to_xml<T: Serialize>(root: &str, value: &T) -> ApiResult<String> {
    quick_xml::se::to_string_with_root(root, value).map_err(|e| {
        error!("Failed to encode XML body: {}", e);
        ApiError::InternalServerError
    })
}

/// Split an `Accept` header value into media ranges.
///
/// Entries with an unparsable quality are dropped.
fn parse_accept(value: &str) -> Vec<MediaRange> {
    value
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let media = parts.next()?.trim().to_ascii_lowercase();
            let (kind, subtype) = media.split_once('/')?;

            let mut quality = 1.0;
            for param in parts {
                if let Some((name, value)) = param.split_once('=') {
                    if name.trim().eq_ignore_ascii_case("q") {
                        quality = value.trim().parse::<f32>().ok()?.clamp(0.0, 1.0);
                    }
                }
            }

            Some(MediaRange {
                kind: kind.to_string(),
                subtype: subtype.to_string(),
                quality,
            })
        })
        .collect()
}

/// Quality the client assigns to `media_type`, taken from the most
/// specific matching range
fn quality_of(ranges: &[MediaRange], media_type: &str) -> Option<f32> {
    let (kind, subtype) = media_type.split_once('/')?;

    ranges
        .iter()
        .filter_map(|range| {
            let specificity = if range.kind == kind && range.subtype == subtype {
                2
            } else if range.kind == kind && range.subtype == "*" {
                1
            } else if range.kind == "*" && range.subtype == "*" {
                0
            } else {
                return None;
            };
            Some((specificity, range.quality))
        })
        .max_by_key(|(specificity, _)| *specificity)
        .map(|(_, quality)| quality)
}
