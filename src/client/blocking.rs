//! Blocking variants of every client operation.
//!
//! A thin wrapper that drives the async client on an owned current-thread
//! runtime. Timeout enforcement still belongs to the channel; the wrapper
//! adds no scheduling of its own.

use std::collections::HashMap;

use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use crate::channel::MethodChannel;
use crate::error::Result;
use crate::params::{
    AggregateDataParams, AudiogramParams, AuthorizationParams, BloodOxygenParams,
    BloodPressureParams, DeleteByUuidParams, DeleteParams, HealthDataParams,
    InsulinDeliveryParams, IntervalDataParams, MealParams, MenstrualFlowParams,
    StepsIntervalParams, WorkoutParams, WriteHealthDataParams,
};
use crate::types::{Permission, PermissionStatus, Platform};

/// Blocking client: same surface as [`super::HealthClient`], driven to
/// completion on an internal runtime.
pub struct HealthClient<C: MethodChannel> {
    inner: super::HealthClient<C>,
    rt: Runtime,
}

impl<C: MethodChannel> HealthClient<C> {
    pub fn new(channel: C, platform: Platform) -> Result<Self> {
        let rt = Builder::new_current_thread().enable_all().build()?;
        Ok(HealthClient {
            inner: super::HealthClient::new(channel, platform),
            rt,
        })
    }

    pub fn with_default_timeout(mut self, seconds: f64) -> Result<Self> {
        self.inner = self.inner.with_default_timeout(seconds)?;
        Ok(self)
    }

    pub fn platform(&self) -> Platform {
        self.inner.platform()
    }

    // Device permissions

    pub fn request_permission(
        &self,
        permission: Permission,
    ) -> Result<Option<PermissionStatus>> {
        self.rt.block_on(self.inner.request_permission(permission))
    }

    pub fn check_permission(&self, permission: Permission) -> Result<Option<PermissionStatus>> {
        self.rt.block_on(self.inner.check_permission(permission))
    }

    pub fn request_multiple_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<HashMap<String, PermissionStatus>> {
        self.rt
            .block_on(self.inner.request_multiple_permissions(permissions))
    }

    pub fn request_and_validate_permissions(&self, permissions: &[Permission]) -> Result<bool> {
        self.rt
            .block_on(self.inner.request_and_validate_permissions(permissions))
    }

    pub fn open_app_settings(&self) -> bool {
        self.rt.block_on(self.inner.open_app_settings())
    }

    // Health data authorization

    pub fn request_authorization(&self, params: &AuthorizationParams) -> Result<bool> {
        self.rt.block_on(self.inner.request_authorization(params))
    }

    pub fn has_permissions(&self, params: &AuthorizationParams) -> Result<Option<bool>> {
        self.rt.block_on(self.inner.has_permissions(params))
    }

    pub fn revoke_permissions(&self) {
        self.rt.block_on(self.inner.revoke_permissions())
    }

    pub fn request_health_data_history_authorization(&self) -> bool {
        self.rt
            .block_on(self.inner.request_health_data_history_authorization())
    }

    pub fn request_health_data_in_background_authorization(&self) -> bool {
        self.rt
            .block_on(self.inner.request_health_data_in_background_authorization())
    }

    pub fn install_health_connect(&self) {
        self.rt.block_on(self.inner.install_health_connect())
    }

    pub fn health_connect_sdk_status(&self) -> Option<bool> {
        self.rt.block_on(self.inner.health_connect_sdk_status())
    }

    // Reads

    pub fn total_steps_in_interval(&self, params: &StepsIntervalParams) -> Result<Option<i64>> {
        self.rt.block_on(self.inner.total_steps_in_interval(params))
    }

    pub fn health_data_from_types(&self, params: &HealthDataParams) -> Result<Vec<Value>> {
        self.rt.block_on(self.inner.health_data_from_types(params))
    }

    pub fn health_aggregate_data_from_types(
        &self,
        params: &AggregateDataParams,
    ) -> Result<Vec<Value>> {
        self.rt
            .block_on(self.inner.health_aggregate_data_from_types(params))
    }

    pub fn health_interval_data_from_types(
        &self,
        params: &IntervalDataParams,
    ) -> Result<Vec<Value>> {
        self.rt
            .block_on(self.inner.health_interval_data_from_types(params))
    }

    // Writes

    pub fn write_blood_oxygen(&self, params: &BloodOxygenParams) -> Result<bool> {
        self.rt.block_on(self.inner.write_blood_oxygen(params))
    }

    pub fn write_blood_pressure(&self, params: &BloodPressureParams) -> Result<bool> {
        self.rt.block_on(self.inner.write_blood_pressure(params))
    }

    pub fn write_health_data(&self, params: &WriteHealthDataParams) -> Result<bool> {
        self.rt.block_on(self.inner.write_health_data(params))
    }

    pub fn write_workout_data(&self, params: &WorkoutParams) -> Result<bool> {
        self.rt.block_on(self.inner.write_workout_data(params))
    }

    pub fn write_meal(&self, params: &MealParams) -> Result<bool> {
        self.rt.block_on(self.inner.write_meal(params))
    }

    pub fn write_audiogram(&self, params: &AudiogramParams) -> Result<bool> {
        self.rt.block_on(self.inner.write_audiogram(params))
    }

    pub fn write_menstruation_flow(&self, params: &MenstrualFlowParams) -> Result<bool> {
        self.rt.block_on(self.inner.write_menstruation_flow(params))
    }

    pub fn write_insulin_delivery(&self, params: &InsulinDeliveryParams) -> Result<bool> {
        self.rt.block_on(self.inner.write_insulin_delivery(params))
    }

    // Deletes

    pub fn delete(&self, params: &DeleteParams) -> Result<bool> {
        self.rt.block_on(self.inner.delete(params))
    }

    pub fn delete_by_uuid(&self, params: &DeleteByUuidParams) -> Result<bool> {
        self.rt.block_on(self.inner.delete_by_uuid(params))
    }
}
