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

//! Client for the Redfish API exposed by Dell iDRAC management controllers.
//!
//! A request names a subsystem (`System`, `Chassis`, `Manager`, `Event`,
//! `Session`, `FW`) and a command. The [`Dispatcher`] routes it to exactly
//! one resolver operation, which builds the resource URI and payload, talks
//! to the controller through a [`Transport`] and flattens the response into
//! a [`NormalizedResult`].

mod dispatcher;
mod endpoint;
mod model;
mod normalize;
mod resolver;
mod transport;

pub use dispatcher::Dispatcher;
pub use endpoint::{
    DEFAULT_PASSWORD, DEFAULT_USERNAME, EndpointConfig, REDFISH_ROOT, ResourceRoots,
};
pub use model::{
    BootTarget, CommandResult, NormalizedResult, OK_MARKER, OperationParams, OperationRequest,
    ResetType, Subsystem,
};
pub use normalize::{EMPTY_VENDOR_ERROR, vendor_error_message};
pub use resolver::{
    ChassisCommand, Command, EventCommand, FirmwareCommand, ManagerCommand, SessionCommand,
    SystemCommand,
};
pub use reqwest::StatusCode;
pub use transport::{DEFAULT_TIMEOUT, IdracClientBuilder, IdracHttpClient, Transport};

pub type IdracResult<T> = Result<T, IdracError>;

#[derive(thiserror::Error, Debug)]
pub enum IdracError {
    #[error("Network error talking to iDRAC at {url}. {source}")]
    NetworkError { url: String, source: reqwest::Error },

    #[error("Could not deserialize response from {url} (HTTP {status_code}). Body: {body}. {source}")]
    JsonDeserializeError {
        url: String,
        status_code: StatusCode,
        body: String,
        source: serde_json::Error,
    },

    #[error("Could not serialize request body for {url}. Obj: {object_debug}. {source}")]
    JsonSerializeError {
        url: String,
        object_debug: String,
        source: serde_json::Error,
    },

    #[error("Response from {url} has no field at {pointer}")]
    MissingField { url: String, pointer: String },

    #[error("Unexpected value at {pointer} in response from {url}: {detail}")]
    UnexpectedShape {
        url: String,
        pointer: String,
        detail: String,
    },

    #[error("{command} requires the {parameter} parameter")]
    MissingParameter {
        command: String,
        parameter: &'static str,
    },

    #[error("Unsupported command '{command}' for subsystem {subsystem}")]
    UnsupportedCommand {
        subsystem: Subsystem,
        command: String,
    },

    #[error("Could not build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl IdracError {
    /// True for failures raised before any request reached the controller.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            IdracError::MissingParameter { .. } | IdracError::UnsupportedCommand { .. }
        )
    }
}
