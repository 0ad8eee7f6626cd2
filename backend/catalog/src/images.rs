//! # Images
//!
//! Image columns hold a mix of full URLs, protocol relative URLs and bare object paths
//! inside the storage bucket, some with unencoded spaces.
use std::borrow::Cow;

const PUBLIC_OBJECT_PATH: &str = "storage/v1/object/public";

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub base_url: String,
    pub bucket: String,
}

fn encode_segment(segment: &str) -> String {
    let decoded = urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment));

    urlencoding::encode(&decoded).into_owned()
}

pub fn resolve_image_url(raw: Option<&str>, storage: &StorageConfig) -> Option<String> {
    let raw = raw?.trim();

    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw.replace(' ', "%20"));
    }

    if raw.starts_with("//") {
        return Some(format!("https:{}", raw.replace(' ', "%20")));
    }

    let path = raw.trim_start_matches('/');
    let path = path
        .strip_prefix(PUBLIC_OBJECT_PATH)
        .map(|path| path.trim_start_matches('/'))
        .unwrap_or(path);
    let path = path
        .strip_prefix(storage.bucket.as_str())
        .and_then(|path| path.strip_prefix('/'))
        .unwrap_or(path);

    let encoded: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(encode_segment)
        .collect();

    if encoded.is_empty() {
        return None;
    }

    Some(format!(
        "{}/{PUBLIC_OBJECT_PATH}/{}/{}",
        storage.base_url.trim_end_matches('/'),
        storage.bucket,
        encoded.join("/")
    ))
}
