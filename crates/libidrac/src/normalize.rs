/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use serde_json::Value;

use crate::{IdracError, IdracResult, NormalizedResult};

const ERROR_KEY: &str = "error";
const EXTENDED_INFO_KEY: &str = "@Message.ExtendedInfo";

/// Used when an error envelope carries nothing readable at all.
pub const EMPTY_VENDOR_ERROR: &str = "vendor error with no message";

/// Human readable message of a Redfish error envelope, `None` for any other body.
///
/// The first `@Message.ExtendedInfo` entry wins. Envelopes without one fall
/// back to the standard `message` field, then to the raw error object, then
/// to [`EMPTY_VENDOR_ERROR`]. Blank strings are skipped at every step, so an
/// envelope always yields a non-empty message.
pub fn vendor_error_message(body: &Value) -> Option<String> {
    let error = body.get(ERROR_KEY)?;
    let non_blank = |s: &&str| !s.trim().is_empty();
    let message = error
        .get(EXTENDED_INFO_KEY)
        .and_then(Value::as_array)
        .and_then(|info| info.first())
        .and_then(|first| first.get("Message"))
        .and_then(Value::as_str)
        .filter(non_blank)
        .or_else(|| error.get("message").and_then(Value::as_str).filter(non_blank))
        .map(str::to_string)
        .or_else(|| match error {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::Object(map) if map.is_empty() => None,
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| EMPTY_VENDOR_ERROR.to_string());
    Some(message)
}

/// Runs `extract` on the success shape of `doc`, after ruling out an error envelope.
pub(crate) fn try_extract<F>(doc: &Document<'_>, extract: F) -> IdracResult<NormalizedResult>
where
    F: FnOnce(&Document<'_>) -> IdracResult<String>,
{
    if let Some(message) = vendor_error_message(doc.body) {
        return Ok(NormalizedResult::VendorError(message));
    }
    extract(doc).map(NormalizedResult::Value)
}

/// A decoded response together with the URL it came from, for error reporting.
pub(crate) struct Document<'a> {
    pub url: &'a str,
    pub body: &'a Value,
}

impl<'a> Document<'a> {
    pub fn new(url: &'a str, body: &'a Value) -> Self {
        Document { url, body }
    }

    /// Value at a JSON pointer such as `/Status/Health`.
    pub fn field(&self, pointer: &str) -> IdracResult<&'a Value> {
        self.body
            .pointer(pointer)
            .ok_or_else(|| IdracError::MissingField {
                url: self.url.to_string(),
                pointer: pointer.to_string(),
            })
    }

    pub fn text(&self, pointer: &str) -> IdracResult<String> {
        self.field(pointer).map(coerce)
    }

    pub fn array(&self, pointer: &str) -> IdracResult<&'a Vec<Value>> {
        self.field(pointer)?
            .as_array()
            .ok_or_else(|| self.unexpected(pointer, "expected an array"))
    }

    /// Final path segment of every `@odata.id` in the link array at `pointer`.
    pub fn link_basenames(&self, pointer: &str) -> IdracResult<Vec<String>> {
        self.array(pointer)?
            .iter()
            .enumerate()
            .map(|(idx, link)| {
                let id_pointer = format!("{pointer}/{idx}/@odata.id");
                link.get("@odata.id")
                    .and_then(Value::as_str)
                    .map(basename)
                    .ok_or_else(|| IdracError::MissingField {
                        url: self.url.to_string(),
                        pointer: id_pointer,
                    })
            })
            .collect()
    }

    pub fn member_basenames(&self) -> IdracResult<Vec<String>> {
        self.link_basenames("/Members")
    }

    pub fn unexpected(&self, pointer: &str, detail: impl Into<String>) -> IdracError {
        IdracError::UnexpectedShape {
            url: self.url.to_string(),
            pointer: pointer.to_string(),
            detail: detail.into(),
        }
    }
}

/// Strings are reported verbatim, everything else as compact JSON.
pub(crate) fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn basename(odata_id: &str) -> String {
    odata_id.rsplit('/').next().unwrap_or_default().to_string()
}

pub(crate) fn join_comma(items: &[String]) -> String {
    items.join(",")
}

pub(crate) fn join_json(items: &[String]) -> String {
    Value::from(items.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const URL: &str = "https://idrac/redfish/v1/Chassis/System.Embedded.1";

    #[test]
    fn extended_info_message_is_used() {
        let body = json!({"error": {"@Message.ExtendedInfo": [
            {"Message": "Resource not found"},
            {"Message": "second"}
        ]}});
        assert_eq!(
            vendor_error_message(&body).as_deref(),
            Some("Resource not found")
        );
    }

    #[test]
    fn malformed_envelopes_still_produce_a_message() {
        let body = json!({"error": {"code": "Base.1.0.GeneralError", "message": "General error"}});
        assert_eq!(vendor_error_message(&body).as_deref(), Some("General error"));

        let body = json!({"error": {"@Message.ExtendedInfo": []}});
        assert_eq!(
            vendor_error_message(&body).as_deref(),
            Some(r#"{"@Message.ExtendedInfo":[]}"#)
        );

        let body = json!({"error": "boom"});
        assert_eq!(vendor_error_message(&body).as_deref(), Some(r#""boom""#));
    }

    #[test]
    fn blank_messages_fall_through() {
        let body = json!({"error": {"@Message.ExtendedInfo": [{"Message": ""}]}});
        assert_eq!(
            vendor_error_message(&body).as_deref(),
            Some(r#"{"@Message.ExtendedInfo":[{"Message":""}]}"#)
        );

        let body = json!({"error": {
            "@Message.ExtendedInfo": [{"Message": "  "}],
            "message": "A general error has occurred."
        }});
        assert_eq!(
            vendor_error_message(&body).as_deref(),
            Some("A general error has occurred.")
        );

        for body in [json!({"error": {}}), json!({"error": null}), json!({"error": ""})] {
            assert_eq!(vendor_error_message(&body).as_deref(), Some(EMPTY_VENDOR_ERROR));
        }
    }

    #[test]
    fn success_shapes_are_not_errors() {
        assert_eq!(vendor_error_message(&json!({"Status": {"Health": "OK"}})), None);
        assert_eq!(vendor_error_message(&json!([1, 2])), None);
        assert_eq!(vendor_error_message(&json!(null)), None);
    }

    #[test]
    fn try_extract_checks_envelope_first() {
        let body = json!({"error": {"@Message.ExtendedInfo": [{"Message": "Resource not found"}]}});
        let doc = Document::new(URL, &body);
        let result = try_extract(&doc, |d| d.text("/Status/Health")).unwrap();
        assert_eq!(
            result,
            NormalizedResult::VendorError("Resource not found".to_string())
        );
    }

    #[test]
    fn missing_field_is_a_typed_error() {
        let body = json!({"Status": {}});
        let doc = Document::new(URL, &body);
        let err = try_extract(&doc, |d| d.text("/Status/Health")).unwrap_err();
        match err {
            IdracError::MissingField { url, pointer } => {
                assert_eq!(url, URL);
                assert_eq!(pointer, "/Status/Health");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn coercion() {
        assert_eq!(coerce(&json!("OK")), "OK");
        assert_eq!(coerce(&json!(2)), "2");
        assert_eq!(coerce(&json!(64.0)), "64.0");
        assert_eq!(coerce(&json!(true)), "true");
        assert_eq!(coerce(&json!(null)), "null");
        assert_eq!(coerce(&json!(["On", "ForceOff"])), r#"["On","ForceOff"]"#);
    }

    #[test]
    fn basenames_of_members() {
        let body = json!({"Members": [
            {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/EthernetInterfaces/NIC.Slot.1-1"},
            {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/EthernetInterfaces/NIC.Slot.2-1"}
        ]});
        let doc = Document::new(URL, &body);
        assert_eq!(
            doc.member_basenames().unwrap(),
            vec!["NIC.Slot.1-1".to_string(), "NIC.Slot.2-1".to_string()]
        );

        let body = json!({"Members": [{"Name": "no id"}]});
        let doc = Document::new(URL, &body);
        assert!(matches!(
            doc.member_basenames(),
            Err(IdracError::MissingField { pointer, .. }) if pointer == "/Members/0/@odata.id"
        ));
    }

    #[test]
    fn json_join_round_trips() {
        let names = vec!["NIC.Slot.1-1".to_string(), "NIC.Slot.2-1".to_string()];
        let encoded = join_json(&names);
        assert_eq!(encoded, r#"["NIC.Slot.1-1","NIC.Slot.2-1"]"#);
        let decoded: Vec<String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, names);
        assert_eq!(join_comma(&names), "NIC.Slot.1-1,NIC.Slot.2-1");
        assert_eq!(join_json(&[]), "[]");
    }
}
