//! Integration tests for `HealthClient` over a scripted mock channel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use health_bridge::params::{
    AudiogramParams, AuthorizationParams, DeleteByUuidParams, DeleteParams, HealthDataParams,
    StepsIntervalParams, WriteHealthDataParams,
};
use health_bridge::types::{
    DataAccess, HealthDataType, Permission, PermissionStatus, Platform,
};
use health_bridge::{ChannelError, Error, HealthClient, MethodCall, MethodChannel};

// ============================================================================
// Mock channel
// ============================================================================

#[derive(Debug, Clone)]
struct RecordedCall {
    method: String,
    data: Option<Value>,
    wait_for_result: bool,
    wait_timeout: f64,
}

/// Scripted channel: maps method names to canned replies and records every
/// invocation.
struct MockChannel {
    replies: HashMap<String, Option<String>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail: bool,
}

impl MockChannel {
    fn new() -> Self {
        MockChannel {
            replies: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    fn reply(mut self, method: &str, reply: Option<&str>) -> Self {
        self.replies
            .insert(method.to_string(), reply.map(|r| r.to_string()));
        self
    }

    fn failing() -> Self {
        MockChannel {
            fail: true,
            ..MockChannel::new()
        }
    }

    fn call_log(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl MethodChannel for MockChannel {
    async fn invoke(&self, call: MethodCall<'_>) -> Result<Option<String>, ChannelError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: call.method.to_string(),
            data: call
                .data
                .as_deref()
                .map(|d| serde_json::from_str(d).expect("call data is valid JSON")),
            wait_for_result: call.wait_for_result,
            wait_timeout: call.wait_timeout,
        });
        if self.fail {
            return Err(ChannelError::new("host unreachable"));
        }
        Ok(self.replies.get(call.method).cloned().flatten())
    }
}

fn window() -> (DateTime<Utc>, DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2025, 4, 30, 8, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 4, 30, 20, 0, 0).unwrap(),
    )
}

// ============================================================================
// Boolean reply protocol
// ============================================================================

#[tokio::test]
async fn bool_op_maps_exact_true_to_success() {
    let channel = MockChannel::new().reply("request_authorization", Some("true"));
    let client = HealthClient::new(channel, Platform::Android);
    let params = AuthorizationParams::new(vec![HealthDataType::Steps], None).unwrap();
    assert!(client.request_authorization(&params).await.unwrap());
}

#[tokio::test]
async fn bool_op_maps_absent_and_false_replies_to_false() {
    for reply in [None, Some("false"), Some("TRUE"), Some("ok")] {
        let channel = MockChannel::new().reply("request_authorization", reply);
        let client = HealthClient::new(channel, Platform::Android);
        let params = AuthorizationParams::new(vec![HealthDataType::Steps], None).unwrap();
        assert!(!client.request_authorization(&params).await.unwrap());
    }
}

#[tokio::test]
async fn channel_error_degrades_to_false_not_error() {
    let client = HealthClient::new(MockChannel::failing(), Platform::Android);
    let params = AuthorizationParams::new(vec![HealthDataType::Steps], None).unwrap();
    assert!(!client.request_authorization(&params).await.unwrap());
}

// ============================================================================
// Tri-state reply protocol
// ============================================================================

#[tokio::test]
async fn has_permissions_distinguishes_false_from_unknown() {
    let params = AuthorizationParams::new(
        vec![HealthDataType::Steps],
        Some(vec![DataAccess::ReadWrite]),
    )
    .unwrap();

    let client = HealthClient::new(
        MockChannel::new().reply("has_permissions", Some("true")),
        Platform::Android,
    );
    assert_eq!(client.has_permissions(&params).await.unwrap(), Some(true));

    let client = HealthClient::new(
        MockChannel::new().reply("has_permissions", Some("false")),
        Platform::Android,
    );
    assert_eq!(client.has_permissions(&params).await.unwrap(), Some(false));

    // HealthKit cannot disclose read grants; the reply is absent.
    let client = HealthClient::new(MockChannel::new(), Platform::Ios);
    assert_eq!(client.has_permissions(&params).await.unwrap(), None);
}

// ============================================================================
// List reply protocol
// ============================================================================

#[tokio::test]
async fn list_op_maps_absent_reply_to_empty_list() {
    let channel = MockChannel::new().reply("get_health_data_from_types", None);
    let client = HealthClient::new(channel, Platform::Android);
    let (start, end) = window();
    let params = HealthDataParams::new(vec![HealthDataType::Steps], start, end, None);
    assert!(client.health_data_from_types(&params).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_op_decodes_json_array_reply() {
    let channel = MockChannel::new().reply(
        "get_health_data_from_types",
        Some(r#"[{"uuid":"abc","value":250.0,"type":"TOTAL_CALORIES_BURNED"}]"#),
    );
    let client = HealthClient::new(channel, Platform::Android);
    let (start, end) = window();
    let params = HealthDataParams::new(vec![HealthDataType::Steps], start, end, None);

    let records = client.health_data_from_types(&params).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["uuid"], "abc");
}

#[tokio::test]
async fn list_op_maps_empty_string_reply_to_empty_list() {
    let channel = MockChannel::new().reply("get_health_data_from_types", Some(""));
    let client = HealthClient::new(channel, Platform::Android);
    let (start, end) = window();
    let params = HealthDataParams::new(vec![HealthDataType::Steps], start, end, None);
    assert!(client.health_data_from_types(&params).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_op_degrades_unparseable_reply_to_empty_list() {
    let channel =
        MockChannel::new().reply("get_health_data_from_types", Some("not json"));
    let client = HealthClient::new(channel, Platform::Android);
    let (start, end) = window();
    let params = HealthDataParams::new(vec![HealthDataType::Steps], start, end, None);
    assert!(client.health_data_from_types(&params).await.unwrap().is_empty());
}

#[tokio::test]
async fn total_steps_parses_integer_reply() {
    let channel = MockChannel::new().reply("get_total_steps_in_interval", Some("8734"));
    let client = HealthClient::new(channel, Platform::Android);
    let (start, end) = window();
    let params = StepsIntervalParams::new(start, end);
    assert_eq!(
        client.total_steps_in_interval(&params).await.unwrap(),
        Some(8734)
    );

    let channel = MockChannel::new().reply("get_total_steps_in_interval", None);
    let client = HealthClient::new(channel, Platform::Android);
    let params = StepsIntervalParams::new(start, end);
    assert_eq!(client.total_steps_in_interval(&params).await.unwrap(), None);
}

// ============================================================================
// Wire shape and timeout pass-through
// ============================================================================

#[tokio::test]
async fn authorization_sends_field_to_envelope_map() {
    let channel = MockChannel::new().reply("request_authorization", Some("true"));
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Android);
    let params = AuthorizationParams::new(
        vec![HealthDataType::Steps, HealthDataType::Weight],
        None,
    )
    .unwrap();
    client.request_authorization(&params).await.unwrap();

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let data = calls[0].data.as_ref().unwrap();
    assert_eq!(data["types"]["value"], json!(["STEPS", "WEIGHT"]));
    assert_eq!(data["types"]["subtype"], "enum");
    assert_eq!(data["data_access"]["value"], json!(["READ", "READ"]));
    assert_eq!(data["data_access"]["class_name"], "DataAccess");
    assert!(calls[0].wait_for_result);
}

#[tokio::test]
async fn wait_timeout_passes_through_unchanged() {
    let channel = MockChannel::new().reply("write_health_data", Some("true"));
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Android);
    let (start, end) = window();
    let params = WriteHealthDataParams::new(72.5, start, end, HealthDataType::Weight)
        .with_wait_timeout(3.5)
        .unwrap();
    client.write_health_data(&params).await.unwrap();

    let calls = log.lock().unwrap();
    assert_eq!(calls[0].wait_timeout, 3.5);
}

#[tokio::test]
async fn single_field_op_sends_one_top_level_envelope() {
    let channel = MockChannel::new().reply("request_permission", Some("granted"));
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Android);

    let status = client
        .request_permission(Permission::ActivityRecognition)
        .await
        .unwrap();
    assert_eq!(status, Some(PermissionStatus::Granted));

    let calls = log.lock().unwrap();
    let data = calls[0].data.as_ref().unwrap();
    // A single envelope, not a field map.
    assert_eq!(data["value"], "activity_recognition");
    assert_eq!(data["type"], "enum");
    assert_eq!(data["class_name"], "Permission");
}

#[tokio::test]
async fn multiple_permissions_parse_status_map() {
    let channel = MockChannel::new().reply(
        "request_multiple_permissions",
        Some(r#"{"activity_recognition":"granted","location":"denied"}"#),
    );
    let client = HealthClient::new(channel, Platform::Android);

    let statuses = client
        .request_multiple_permissions(&[
            Permission::ActivityRecognition,
            Permission::Location,
        ])
        .await
        .unwrap();
    assert_eq!(
        statuses.get("activity_recognition"),
        Some(&PermissionStatus::Granted)
    );
    assert_eq!(statuses.get("location"), Some(&PermissionStatus::Denied));

    let channel = MockChannel::new().reply(
        "request_multiple_permissions",
        Some(r#"{"activity_recognition":"granted","location":"denied"}"#),
    );
    let client = HealthClient::new(channel, Platform::Android);
    assert!(!client
        .request_and_validate_permissions(&[
            Permission::ActivityRecognition,
            Permission::Location
        ])
        .await
        .unwrap());
}

#[tokio::test]
async fn validate_permissions_requires_every_grant() {
    let channel = MockChannel::new().reply(
        "request_multiple_permissions",
        Some(r#"{"activity_recognition":"granted"}"#),
    );
    let client = HealthClient::new(channel, Platform::Android);
    assert!(client
        .request_and_validate_permissions(&[Permission::ActivityRecognition])
        .await
        .unwrap());

    // Remote failure yields an empty status map, which is not "all granted".
    let client = HealthClient::new(MockChannel::failing(), Platform::Android);
    assert!(!client
        .request_and_validate_permissions(&[Permission::ActivityRecognition])
        .await
        .unwrap());
}

// ============================================================================
// Platform gating
// ============================================================================

#[tokio::test]
async fn sdk_status_short_circuits_off_android() {
    let channel = MockChannel::new();
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Ios);

    assert_eq!(client.health_connect_sdk_status().await, None);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sdk_status_maps_available_sentinel() {
    let channel = MockChannel::new().reply(
        "get_health_connect_sdk_status",
        Some("HealthConnectSdkStatus.sdkAvailable"),
    );
    let client = HealthClient::new(channel, Platform::Android);
    assert_eq!(client.health_connect_sdk_status().await, Some(true));

    let channel = MockChannel::new().reply(
        "get_health_connect_sdk_status",
        Some("HealthConnectSdkStatus.sdkUnavailable"),
    );
    let client = HealthClient::new(channel, Platform::Android);
    assert_eq!(client.health_connect_sdk_status().await, Some(false));
}

#[tokio::test]
async fn history_authorization_is_fixed_true_on_ios() {
    let channel = MockChannel::new();
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Ios);

    assert!(client.request_health_data_history_authorization().await);
    assert!(client.request_health_data_in_background_authorization().await);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn revoke_and_install_are_android_only_fire_and_forget() {
    let channel = MockChannel::new();
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Ios);
    client.revoke_permissions().await;
    client.install_health_connect().await;
    assert!(log.lock().unwrap().is_empty());

    let channel = MockChannel::new();
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Android);
    client.revoke_permissions().await;
    client.install_health_connect().await;

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, "revoke_permissions");
    assert!(!calls[0].wait_for_result);
    assert_eq!(calls[1].method, "install_health_connect");
}

#[tokio::test]
async fn write_audiogram_is_a_hard_error_on_android() {
    let channel = MockChannel::new();
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Android);
    let (start, end) = window();
    let params = AudiogramParams::new(vec![250.0], vec![10.0], vec![15.0], start, end);

    let err = client.write_audiogram(&params).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedPlatform { .. }));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn write_audiogram_invokes_on_ios() {
    let channel = MockChannel::new().reply("write_audiogram", Some("true"));
    let client = HealthClient::new(channel, Platform::Ios);
    let (start, end) = window();
    let params = AudiogramParams::new(vec![250.0], vec![10.0], vec![15.0], start, end);
    assert!(client.write_audiogram(&params).await.unwrap());
}

// ============================================================================
// Deletes
// ============================================================================

// The remote side registers one delete handler and branches on the payload,
// so both delete shapes go out under the same method name.
#[tokio::test]
async fn both_delete_shapes_invoke_the_same_method() {
    let channel = MockChannel::new().reply("delete_by_uuid", Some("true"));
    let log = channel.call_log();
    let client = HealthClient::new(channel, Platform::Android);
    let (start, _) = window();

    let windowed = DeleteParams::new(HealthDataType::Steps, start);
    assert!(client.delete(&windowed).await.unwrap());

    let by_uuid = DeleteByUuidParams::new("69715ead-9074-491e-8d30-83a75f1fb33b");
    assert!(client.delete_by_uuid(&by_uuid).await.unwrap());

    let calls = log.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, "delete_by_uuid");
    assert_eq!(calls[1].method, "delete_by_uuid");
    // Distinct payloads tell the handler which shape arrived.
    let windowed_data = calls[0].data.as_ref().unwrap();
    assert_eq!(windowed_data["start_time"]["type"], "date");
    assert_eq!(windowed_data["uuid"], serde_json::Value::Null);
    let uuid_data = calls[1].data.as_ref().unwrap();
    assert_eq!(uuid_data["uuid"]["type"], "str");
}

// ============================================================================
// Blocking client
// ============================================================================

#[test]
fn blocking_client_mirrors_async_surface() {
    let channel = MockChannel::new()
        .reply("request_authorization", Some("true"))
        .reply("get_total_steps_in_interval", Some("120"));
    let client =
        health_bridge::client::blocking::HealthClient::new(channel, Platform::Android).unwrap();

    let params = AuthorizationParams::new(vec![HealthDataType::Steps], None).unwrap();
    assert!(client.request_authorization(&params).unwrap());

    let (start, end) = window();
    let params = StepsIntervalParams::new(start, end);
    assert_eq!(client.total_steps_in_interval(&params).unwrap(), Some(120));
}
