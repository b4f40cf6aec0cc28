use super::*;

// =============================================================
// Photo
// =============================================================

#[test]
fn photo_deserializes_script_row() {
    let photo: Photo = serde_json::from_str(
        r#"{"id":"abc","url":"https://u","thumbnail":"https://t","description":"congrats!"}"#,
    )
    .unwrap();
    assert_eq!(photo.id, "abc");
    assert_eq!(photo.description, "congrats!");
}

#[test]
fn photo_accepts_numeric_id() {
    let photo: Photo = serde_json::from_str(r#"{"id":42,"url":"u","thumbnail":"t","description":""}"#).unwrap();
    assert_eq!(photo.id, "42");
}

#[test]
fn photo_null_or_missing_description_is_empty() {
    let null: Photo = serde_json::from_str(r#"{"id":"a","url":"u","thumbnail":"t","description":null}"#).unwrap();
    let missing: Photo = serde_json::from_str(r#"{"id":"a","url":"u","thumbnail":"t"}"#).unwrap();
    assert_eq!(null.description, "");
    assert_eq!(missing.description, "");
}

#[test]
fn numeric_caption_keeps_listing_intact() {
    let photos: Vec<Photo> = serde_json::from_str(
        r#"[{"id":"a","url":"u","thumbnail":"t","description":"congrats!"},
            {"id":"b","url":"u","thumbnail":"t","description":2026}]"#,
    )
    .unwrap();
    assert_eq!(photos[0].description, "congrats!");
    assert_eq!(photos[1].description, "2026");
}

#[test]
fn photo_rejects_object_caption() {
    let result: Result<Photo, _> = serde_json::from_str(r#"{"id":"a","url":"u","thumbnail":"t","description":[1]}"#);
    assert!(result.is_err());
}

#[test]
fn photo_rejects_object_id() {
    let result: Result<Photo, _> = serde_json::from_str(r#"{"id":{},"url":"u","thumbnail":"t"}"#);
    assert!(result.is_err());
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn success_envelope_yields_data() {
    let env: Envelope<Vec<Photo>> = serde_json::from_str(
        r#"{"status":"success","data":[{"id":"1","url":"u","thumbnail":"t","description":"hi"}]}"#,
    )
    .unwrap();
    let photos = env.into_result().unwrap().unwrap();
    assert_eq!(photos.len(), 1);
}

#[test]
fn success_without_data_is_ok_none() {
    let env: Envelope<()> = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    assert_eq!(env.into_result(), Ok(None));
}

fn decode_any<T: serde::de::DeserializeOwned>(body: &str) -> Envelope<T> {
    serde_json::from_str(body).unwrap()
}

#[test]
fn envelope_payload_needs_no_default_impl() {
    let env: Envelope<CaptionResponse> = decode_any(r#"{"status":"success"}"#);
    assert_eq!(env.data, None);
    let env: Envelope<CaptionResponse> = decode_any(r#"{"status":"success","data":{"caption":"forever"}}"#);
    assert_eq!(env.into_result(), Ok(Some(CaptionResponse { caption: "forever".to_owned() })));
}

#[test]
fn error_envelope_keeps_message_verbatim() {
    let env: Envelope<Vec<Photo>> = serde_json::from_str(r#"{"status":"error","message":"quota exceeded"}"#).unwrap();
    assert_eq!(env.into_result(), Err(GalleryError::Remote("quota exceeded".to_owned())));
}

#[test]
fn error_envelope_without_message_uses_fallback() {
    let env: Envelope<()> = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
    assert_eq!(env.into_result(), Err(GalleryError::Remote(UNKNOWN_ERROR.to_owned())));
}

#[test]
fn envelope_constructors_serialize_compactly() {
    let ok = serde_json::to_value(Envelope::<()>::ok()).unwrap();
    assert_eq!(ok, serde_json::json!({"status": "success"}));
    let err = serde_json::to_value(Envelope::<()>::error("boom")).unwrap();
    assert_eq!(err, serde_json::json!({"status": "error", "message": "boom"}));
}

// =============================================================
// Requests
// =============================================================

#[test]
fn upload_request_uses_script_field_names() {
    let req = UploadRequest {
        filename: "a.jpg".to_owned(),
        mime_type: "image/jpeg".to_owned(),
        base64: "data:image/jpeg;base64,AAAA".to_owned(),
        description: "so happy".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["filename"], "a.jpg");
    assert_eq!(value["mimeType"], "image/jpeg");
    assert_eq!(value["base64"], "data:image/jpeg;base64,AAAA");
    assert_eq!(value["description"], "so happy");
}

#[test]
fn site_info_defaults_are_populated() {
    let site = SiteInfo::default();
    assert_eq!(site.title, "Christy & Ming");
    assert!(site.story.starts_with("Welcome to our gallery."));
    let value = serde_json::to_value(&site).unwrap();
    assert!(value.get("bannerUrl").is_some());
}
