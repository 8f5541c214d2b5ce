//! Authorization parameters shared by request-authorization and
//! has-permissions.

use crate::envelope::ParamValue;
use crate::error::{Error, Result};
use crate::types::{DataAccess, HealthDataType};

use super::{check_timeout, WrappedFields, WrappedParams, DEFAULT_WAIT_TIMEOUT};

/// Data types to request access for, with one access level per type.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationParams {
    types: Vec<HealthDataType>,
    data_access: Vec<DataAccess>,
    wait_timeout: f64,
}

impl AuthorizationParams {
    /// Build the request. An omitted `data_access` defaults to read-only
    /// access for every type; an explicit list must match `types` in length.
    pub fn new(
        types: Vec<HealthDataType>,
        data_access: Option<Vec<DataAccess>>,
    ) -> Result<Self> {
        let data_access = match data_access {
            None => vec![DataAccess::Read; types.len()],
            Some(list) => {
                if list.len() != types.len() {
                    return Err(Error::LengthMismatch {
                        expected: types.len(),
                        actual: list.len(),
                    });
                }
                list
            }
        };
        Ok(AuthorizationParams {
            types,
            data_access,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        })
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }

    pub fn data_access(&self) -> &[DataAccess] {
        &self.data_access
    }
}

impl WrappedParams for AuthorizationParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("types", ParamValue::enum_list(&self.types))?;
        fields.push("data_access", ParamValue::enum_list(&self.data_access))?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}
