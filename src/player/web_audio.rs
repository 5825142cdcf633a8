//! `<audio>` element in the webview, driven through `document::eval`
//!
//! Every call looks the element up by id, runs a small script against it and
//! sends back a JSON reply. A reply carries either a value, an error string
//! (a thrown exception), `rejected` when `play()` refused to start, or
//! `missing` when the element is not in the DOM.

use super::media::{MediaElement, MediaError};
use dioxus::document;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::trace;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EvalReply {
    missing: bool,
    error: Option<String>,
    rejected: Option<String>,
    value: serde_json::Value,
}

impl EvalReply {
    fn into_value(self, element_id: &str) -> Result<serde_json::Value, MediaError> {
        if self.missing {
            return Err(MediaError::ElementMissing(element_id.to_string()));
        }
        if let Some(reason) = self.rejected {
            return Err(MediaError::PlayRejected(reason));
        }
        if let Some(error) = self.error {
            return Err(MediaError::Eval(error));
        }
        Ok(self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebAudioElement {
    element_id: String,
}

impl WebAudioElement {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    fn script(&self, body: &str) -> String {
        // serde_json gives a correctly escaped JS string literal
        let id = serde_json::to_string(&self.element_id).unwrap_or_else(|_| "\"\"".to_string());
        format!(
            "const el = document.getElementById({id});\n\
             if (!el) {{ return {{ missing: true }}; }}\n\
             try {{\n{body}\n}} catch (e) {{ return {{ error: String(e) }}; }}"
        )
    }

    async fn run(&self, body: &str) -> Result<serde_json::Value, MediaError> {
        let script = self.script(body);
        trace!("Evaluating media script: {}", script);

        let reply: EvalReply = document::eval(&script)
            .join()
            .await
            .map_err(|e| MediaError::Eval(format!("{:?}", e)))?;

        reply.into_value(&self.element_id)
    }

    async fn read<T: DeserializeOwned>(&self, body: &str) -> Result<T, MediaError> {
        let value = self.run(body).await?;
        serde_json::from_value(value).map_err(|e| MediaError::Decode(e.to_string()))
    }

    /// Read a number that the element may report as NaN or Infinity.
    /// JSON has no such values, so they arrive as null.
    async fn read_number(&self, body: &str) -> Result<f64, MediaError> {
        let value: Option<f64> = self.read(body).await?;
        Ok(value.unwrap_or(f64::NAN))
    }
}

#[async_trait::async_trait(?Send)]
impl MediaElement for WebAudioElement {
    async fn is_paused(&self) -> Result<bool, MediaError> {
        self.read("return { value: el.paused };").await
    }

    async fn play(&self) -> Result<(), MediaError> {
        // play() returns a promise that rejects when the host refuses to start
        self.run(
            "try {\n  await el.play();\n} catch (e) {\n  return { rejected: String(e) };\n}\nreturn {};",
        )
        .await
        .map(|_| ())
    }

    async fn pause(&self) -> Result<(), MediaError> {
        self.run("el.pause();\nreturn {};").await.map(|_| ())
    }

    async fn current_time(&self) -> Result<f64, MediaError> {
        self.read_number("return { value: el.currentTime };").await
    }

    async fn set_current_time(&self, seconds: f64) -> Result<(), MediaError> {
        if !seconds.is_finite() {
            return Err(MediaError::Decode(format!(
                "cannot seek to non-finite position {}",
                seconds
            )));
        }
        self.run(&format!("el.currentTime = {};\nreturn {{}};", seconds))
            .await
            .map(|_| ())
    }

    async fn duration(&self) -> Result<f64, MediaError> {
        self.read_number("return { value: el.duration };").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_escapes_element_id() {
        let element = WebAudioElement::new("a\"b");
        let script = element.script("return {};");
        assert!(script.starts_with("const el = document.getElementById(\"a\\\"b\");"));
        assert!(script.contains("catch (e)"));
    }

    #[test]
    fn test_reply_defaults() {
        let reply: EvalReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.missing);
        assert!(reply.error.is_none());
        assert!(reply.value.is_null());

        let reply: EvalReply = serde_json::from_str(r#"{"value": null}"#).unwrap();
        let duration: Option<f64> = serde_json::from_value(reply.value).unwrap();
        assert_eq!(duration, None);
    }

    #[test]
    fn test_reply_errors() {
        let reply: EvalReply =
            serde_json::from_str(r#"{"rejected": "NotAllowedError"}"#).unwrap();
        assert_eq!(
            reply.into_value("a"),
            Err(MediaError::PlayRejected("NotAllowedError".to_string()))
        );

        let reply: EvalReply = serde_json::from_str(r#"{"error": "TypeError"}"#).unwrap();
        assert_eq!(
            reply.into_value("a"),
            Err(MediaError::Eval("TypeError".to_string()))
        );

        let reply: EvalReply = serde_json::from_str(r#"{"missing": true}"#).unwrap();
        assert_eq!(
            reply.into_value("a"),
            Err(MediaError::ElementMissing("a".to_string()))
        );

        let reply: EvalReply = serde_json::from_str(r#"{"value": true}"#).unwrap();
        assert_eq!(reply.into_value("a"), Ok(serde_json::Value::Bool(true)));
    }
}
