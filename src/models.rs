use serde::{Deserialize, Serialize};

/// One blog post returned by the search endpoint. Field names follow the
/// upstream wire format (`bloggername`, `postdate`), renamed to the usual
/// Rust casing here.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Post title; may embed `<b>` emphasis markers around matched terms.
    pub title: String,
    pub link: String,
    /// Excerpt; may embed `<b>` emphasis markers like the title.
    pub description: String,
    #[serde(rename = "bloggername")]
    pub blogger_name: String,
    /// 8-digit `YYYYMMDD` string as sent by the backend.
    #[serde(rename = "postdate")]
    pub post_date: String,
}

/// One row of the cached music chart.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartEntry {
    pub rank: u32,
    pub title: String,
    pub artist: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

/// Chart payload. A response without `items` is structurally valid but
/// carries no data, which the client reports as a soft failure.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub items: Option<Vec<ChartEntry>>,
}

/// Error payload shape used by the backend on non-2xx responses. Both fields
/// are optional; `message` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_serializes_to_wire_shape() {
        let json = serde_json::to_string(&SearchRequest { query: "seoul cafes" }).unwrap();
        assert_eq!(json, r#"{"query":"seoul cafes"}"#);
    }

    #[test]
    fn search_result_decodes_wire_field_names() {
        let json = r#"{
            "title": "a <b>post</b>",
            "link": "https://blog.example/p",
            "description": "text",
            "bloggername": "writer",
            "postdate": "20240315"
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.blogger_name, "writer");
        assert_eq!(result.post_date, "20240315");
    }

    #[test]
    fn chart_response_without_items_is_none() {
        let body: ChartResponse = serde_json::from_str(r#"{"status": "empty"}"#).unwrap();
        assert!(body.items.is_none());
    }
}
