use std::error::Error;

use botwire::{media::Animation, ApiResponse, FromJson, JsonObject, ToJson, ToObject};
use serde_json::{json, Value};

fn main() -> Result<(), Box<dyn Error>> {
    demo()
}

fn demo() -> Result<(), Box<dyn Error>> {
    let body = r#"
    {
      "ok": true,
      "result": {
        "file_id": "CgACAgQAAxkBAAIBQ2Rl",
        "file_unique_id": "AgADcwwAAnNwMVM",
        "width": 320,
        "height": 240,
        "duration": 4,
        "thumb": {
          "file_id": "AAMCBAADGQEAAgFDZGU",
          "file_unique_id": "AQADcwwAAnNwMVNy",
          "width": 90,
          "height": 51
        },
        "file_name": "clip.mp4",
        "mime_type": "video/mp4"
      }
    }
    "#;

    let response = ApiResponse::<Animation>::from_json(body)?;
    let animation = response.into_result()?;
    println!("Decoded animation: {}", animation);

    if let Some(thumb) = animation.thumb.as_option() {
        println!("Thumbnail is {}x{}", thumb.width, thumb.height);
    }

    println!("As JSON text: {}", animation.to_json()?);

    let mut request = JsonObject::new();
    request.insert("chat_id".to_owned(), json!(44_615_233));
    request.insert(
        "animation".to_owned(),
        Value::Object(animation.to_object()?),
    );
    println!(
        "Outgoing request body: \n{}",
        serde_json::to_string_pretty(&request)?
    );

    Ok(())
}

#[test]
fn demo_test() -> Result<(), Box<dyn Error>> {
    demo()
}
