//! Call wrappers: one method per remote operation.
//!
//! Each wrapper serializes its parameter object through the envelope
//! encoder, invokes the channel, and interprets the textual reply. Remote
//! failures never surface as errors: boolean operations degrade to `false`,
//! list operations to `[]`, permission lookups to `None`. Permission denial
//! is an expected outcome and the caller's UI is expected to branch on it.
//!
//! Operations that are meaningless on the current platform short-circuit
//! locally: some return a fixed sentinel without touching the channel,
//! one (audiogram writes on Android) is a hard error. The per-operation
//! split is part of the public contract.

pub mod blocking;

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::channel::{MethodCall, MethodChannel};
use crate::envelope::{wrap, ParamValue};
use crate::error::{Error, Result};
use crate::params::{
    AggregateDataParams, AudiogramParams, AuthorizationParams, BloodOxygenParams,
    BloodPressureParams, DeleteByUuidParams, DeleteParams, HealthDataParams,
    InsulinDeliveryParams, IntervalDataParams, MealParams, MenstrualFlowParams,
    StepsIntervalParams, WorkoutParams, WrappedParams, WriteHealthDataParams,
    DEFAULT_WAIT_TIMEOUT,
};
use crate::types::{Permission, PermissionStatus, Platform};

/// Reply sentinel for an available Health Connect SDK.
const SDK_AVAILABLE: &str = "HealthConnectSdkStatus.sdkAvailable";

/// Asynchronous client over a user-provided invoke channel.
///
/// Holds no state besides the channel and the platform; every call is
/// independent.
pub struct HealthClient<C: MethodChannel> {
    channel: C,
    platform: Platform,
    default_timeout: f64,
}

impl<C: MethodChannel> HealthClient<C> {
    pub fn new(channel: C, platform: Platform) -> Self {
        HealthClient {
            channel,
            platform,
            default_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    /// Timeout used by operations that take no parameter object.
    pub fn with_default_timeout(mut self, seconds: f64) -> Result<Self> {
        self.default_timeout = crate::params::check_timeout(seconds)?;
        Ok(self)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    // ------------------------------------------------------------------
    // Channel plumbing
    // ------------------------------------------------------------------

    async fn invoke_reply(
        &self,
        method: &str,
        data: Option<String>,
        wait_timeout: f64,
    ) -> Option<String> {
        debug!(method, wait_timeout, "invoking remote method");
        match self
            .channel
            .invoke(MethodCall::new(method, data, wait_timeout))
            .await
        {
            Ok(reply) => reply,
            Err(err) => {
                warn!(method, error = %err, "channel error, degrading to empty reply");
                None
            }
        }
    }

    /// Reply protocol for boolean operations: exactly `"true"` is success.
    async fn invoke_bool(&self, method: &str, data: Option<String>, wait_timeout: f64) -> bool {
        matches!(
            self.invoke_reply(method, data, wait_timeout).await.as_deref(),
            Some("true")
        )
    }

    /// Reply protocol for tri-state lookups: unknown replies mean "cannot
    /// determine" (HealthKit never discloses read grants).
    async fn invoke_tristate(
        &self,
        method: &str,
        data: Option<String>,
        wait_timeout: f64,
    ) -> Option<bool> {
        match self.invoke_reply(method, data, wait_timeout).await.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    /// Reply protocol for list operations: absent or unparseable replies
    /// are an empty list, never an error.
    async fn invoke_list(
        &self,
        method: &str,
        data: Option<String>,
        wait_timeout: f64,
    ) -> Vec<Value> {
        let Some(reply) = self.invoke_reply(method, data, wait_timeout).await else {
            return Vec::new();
        };
        if reply.is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&reply) {
            Ok(Value::Array(records)) => records,
            Ok(_) | Err(_) => {
                warn!(method, "unparseable list reply, degrading to empty list");
                Vec::new()
            }
        }
    }

    /// Best-effort call with no reply. Channel errors are logged and
    /// dropped.
    async fn invoke_void(&self, method: &'static str) {
        if let Err(err) = self.channel.invoke(MethodCall::fire_and_forget(method)).await {
            warn!(method, error = %err, "channel error on fire-and-forget call");
        }
    }

    /// Single-field operations send one top-level envelope.
    fn single_envelope(value: &ParamValue) -> Result<String> {
        Ok(serde_json::to_string(&wrap(value)?)?)
    }

    // ------------------------------------------------------------------
    // Device permissions
    // ------------------------------------------------------------------

    /// Request one device-level runtime permission.
    pub async fn request_permission(
        &self,
        permission: Permission,
    ) -> Result<Option<PermissionStatus>> {
        let data = Self::single_envelope(&ParamValue::from_enum(permission))?;
        let reply = self
            .invoke_reply("request_permission", Some(data), self.default_timeout)
            .await;
        Ok(reply.as_deref().and_then(PermissionStatus::from_reply))
    }

    /// Check one device-level runtime permission without prompting.
    pub async fn check_permission(
        &self,
        permission: Permission,
    ) -> Result<Option<PermissionStatus>> {
        let data = Self::single_envelope(&ParamValue::from_enum(permission))?;
        let reply = self
            .invoke_reply("check_permission", Some(data), self.default_timeout)
            .await;
        Ok(reply.as_deref().and_then(PermissionStatus::from_reply))
    }

    /// Request several permissions at once; returns the status per
    /// permission wire value. Empty on remote failure.
    pub async fn request_multiple_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<HashMap<String, PermissionStatus>> {
        let data = Self::single_envelope(&ParamValue::enum_list(permissions))?;
        let Some(reply) = self
            .invoke_reply(
                "request_multiple_permissions",
                Some(data),
                self.default_timeout,
            )
            .await
        else {
            return Ok(HashMap::new());
        };

        let raw: HashMap<String, String> = match serde_json::from_str(&reply) {
            Ok(map) => map,
            Err(_) => {
                warn!("unparseable permission-status map, degrading to empty");
                return Ok(HashMap::new());
            }
        };
        Ok(raw
            .into_iter()
            .filter_map(|(name, status)| {
                PermissionStatus::from_reply(&status).map(|s| (name, s))
            })
            .collect())
    }

    /// Request several permissions and report whether every one of them
    /// came back granted.
    pub async fn request_and_validate_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<bool> {
        use crate::envelope::WireEnum;

        let statuses = self.request_multiple_permissions(permissions).await?;
        Ok(permissions.iter().all(|p| {
            statuses.get(p.wire_value()) == Some(&PermissionStatus::Granted)
        }))
    }

    /// Open the system settings page for the app.
    pub async fn open_app_settings(&self) -> bool {
        self.invoke_bool("open_app_settings", None, self.default_timeout)
            .await
    }

    // ------------------------------------------------------------------
    // Health data authorization
    // ------------------------------------------------------------------

    /// Request access to the data types in `params`.
    ///
    /// On HealthKit the platform never discloses read grants, so a
    /// successful reply only means the request dialog was shown without
    /// error.
    pub async fn request_authorization(&self, params: &AuthorizationParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("request_authorization", Some(data), params.wait_timeout())
            .await)
    }

    /// Check whether the given types already have the given access.
    /// `None` when the platform cannot answer (HealthKit read access).
    pub async fn has_permissions(&self, params: &AuthorizationParams) -> Result<Option<bool>> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_tristate("has_permissions", Some(data), params.wait_timeout())
            .await)
    }

    /// Revoke all granted Health Connect permissions. Android only; a
    /// silent no-op on iOS, where programmatic revocation does not exist.
    pub async fn revoke_permissions(&self) {
        if self.platform != Platform::Android {
            return;
        }
        self.invoke_void("revoke_permissions").await;
    }

    /// Request the Health Connect data-history permission. Android only;
    /// fixed `true` on iOS without touching the channel.
    pub async fn request_health_data_history_authorization(&self) -> bool {
        if self.platform == Platform::Ios {
            return true;
        }
        self.invoke_bool(
            "request_health_data_history_authorization",
            None,
            self.default_timeout,
        )
        .await
    }

    /// Request the Health Connect background-read permission. Android only;
    /// fixed `true` on iOS without touching the channel.
    pub async fn request_health_data_in_background_authorization(&self) -> bool {
        if self.platform == Platform::Ios {
            return true;
        }
        self.invoke_bool(
            "request_health_data_in_background_authorization",
            None,
            self.default_timeout,
        )
        .await
    }

    /// Prompt the user to install the Health Connect app. Android only; a
    /// silent no-op on iOS.
    pub async fn install_health_connect(&self) {
        if self.platform != Platform::Android {
            return;
        }
        self.invoke_void("install_health_connect").await;
    }

    /// Health Connect SDK availability. `None` when the platform is not
    /// Android (decided locally, the channel is never invoked).
    pub async fn health_connect_sdk_status(&self) -> Option<bool> {
        if self.platform != Platform::Android {
            return None;
        }
        let reply = self
            .invoke_reply("get_health_connect_sdk_status", None, self.default_timeout)
            .await;
        Some(reply.as_deref() == Some(SDK_AVAILABLE))
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Total steps in a time window. `None` when the store has no answer.
    pub async fn total_steps_in_interval(
        &self,
        params: &StepsIntervalParams,
    ) -> Result<Option<i64>> {
        let data = params.to_wrapped()?;
        let reply = self
            .invoke_reply(
                "get_total_steps_in_interval",
                Some(data),
                params.wait_timeout(),
            )
            .await;
        Ok(reply.and_then(|r| r.parse().ok()))
    }

    /// Fetch raw data points for the requested types.
    pub async fn health_data_from_types(&self, params: &HealthDataParams) -> Result<Vec<Value>> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_list(
                "get_health_data_from_types",
                Some(data),
                params.wait_timeout(),
            )
            .await)
    }

    /// Fetch aggregated data for the requested types.
    pub async fn health_aggregate_data_from_types(
        &self,
        params: &AggregateDataParams,
    ) -> Result<Vec<Value>> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_list(
                "get_health_aggregate_data_from_types",
                Some(data),
                params.wait_timeout(),
            )
            .await)
    }

    /// Fetch data points bucketed into fixed intervals.
    pub async fn health_interval_data_from_types(
        &self,
        params: &IntervalDataParams,
    ) -> Result<Vec<Value>> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_list(
                "get_health_interval_data_from_types",
                Some(data),
                params.wait_timeout(),
            )
            .await)
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    pub async fn write_blood_oxygen(&self, params: &BloodOxygenParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("write_blood_oxygen", Some(data), params.wait_timeout())
            .await)
    }

    pub async fn write_blood_pressure(&self, params: &BloodPressureParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("write_blood_pressure", Some(data), params.wait_timeout())
            .await)
    }

    pub async fn write_health_data(&self, params: &WriteHealthDataParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("write_health_data", Some(data), params.wait_timeout())
            .await)
    }

    pub async fn write_workout_data(&self, params: &WorkoutParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("write_workout_data", Some(data), params.wait_timeout())
            .await)
    }

    pub async fn write_meal(&self, params: &MealParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("write_meal", Some(data), params.wait_timeout())
            .await)
    }

    /// Save an audiogram. HealthKit only: calling this on Android is a hard
    /// error, not a degraded `false`.
    pub async fn write_audiogram(&self, params: &AudiogramParams) -> Result<bool> {
        if self.platform == Platform::Android {
            return Err(Error::UnsupportedPlatform {
                operation: "write_audiogram",
                platform: self.platform.as_str(),
            });
        }
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("write_audiogram", Some(data), params.wait_timeout())
            .await)
    }

    pub async fn write_menstruation_flow(&self, params: &MenstrualFlowParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool(
                "write_menstruation_flow",
                Some(data),
                params.wait_timeout(),
            )
            .await)
    }

    pub async fn write_insulin_delivery(&self, params: &InsulinDeliveryParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("write_insulin_delivery", Some(data), params.wait_timeout())
            .await)
    }

    // ------------------------------------------------------------------
    // Deletes
    // ------------------------------------------------------------------

    /// Delete all records of one type inside a time window.
    ///
    /// The remote dispatcher registers a single delete handler under
    /// `delete_by_uuid` and branches on the payload shape, so both delete
    /// variants invoke the same method name.
    pub async fn delete(&self, params: &DeleteParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("delete_by_uuid", Some(data), params.wait_timeout())
            .await)
    }

    /// Delete one record by UUID.
    pub async fn delete_by_uuid(&self, params: &DeleteByUuidParams) -> Result<bool> {
        let data = params.to_wrapped()?;
        Ok(self
            .invoke_bool("delete_by_uuid", Some(data), params.wait_timeout())
            .await)
    }
}
