use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::validation::patterns::{IMAGE_CONTENT_TYPE_REGEX, IMAGE_DATA_URI_REGEX};

const DATA_IMAGE_PREFIX: &str = "data:image/";

/// Image subtype from a `data:image/<type>;base64,` URI.
pub fn image_type_from_data_uri(data: &str) -> Option<String> {
    IMAGE_DATA_URI_REGEX
        .captures(data)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Image subtype from a `Content-Type` header value such as `image/png`.
pub fn image_type_from_content_type(content_type: &str) -> Option<String> {
    IMAGE_CONTENT_TYPE_REGEX
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect the image type of a data URI, or of a remote URL with a single
/// HEAD request. Network failures and non-image responses give `None`.
pub async fn get_image_type(client: &Client, image_data: &str) -> Option<String> {
    if image_data.starts_with(DATA_IMAGE_PREFIX) {
        return image_type_from_data_uri(image_data);
    }

    let response = match client.head(image_data).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, url = image_data, "error fetching image URL");
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!(status = %response.status(), url = image_data, "image HEAD request not OK");
        return None;
    }

    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(image_type_from_content_type)
}
