use std::io::Write;
use storyboard_core::ImagePayload;

#[test]
fn loads_image_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".JPG").tempfile()?;
    file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0])?;

    let payload = ImagePayload::from_path(file.path())?;
    assert_eq!(payload.mime(), "image/jpeg");
    assert_eq!(payload.decode()?, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    Ok(())
}

#[test]
fn rejects_non_image_file() -> anyhow::Result<()> {
    let file = tempfile::Builder::new().suffix(".txt").tempfile()?;
    let err = ImagePayload::from_path(file.path()).unwrap_err();
    assert!(err.is_input_invalid());
    Ok(())
}

#[test]
fn missing_file_is_input_error() {
    let err = ImagePayload::from_path("/definitely/not/here.png").unwrap_err();
    assert!(err.is_input_invalid());
}

#[test]
fn data_url_round_trips_through_html_form() -> anyhow::Result<()> {
    let payload = ImagePayload::from_bytes("image/webp", b"RIFF")?;
    let parsed = ImagePayload::from_data_url(&payload.to_data_url())?;
    assert_eq!(parsed, payload);
    Ok(())
}

#[test]
fn rejects_invalid_base64() {
    let err = ImagePayload::from_data_url("data:image/png;base64,@@@").unwrap_err();
    assert!(err.is_input_invalid());
}
